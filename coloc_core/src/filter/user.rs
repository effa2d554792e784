use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Filter, PagingSpec, ProfileFilter, Searchable,
    types::{Gender, UserStatus, UserType},
};
use crate::predicate::{Criteria, Predicate};

/// Search over registered users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    #[serde(rename = "type")]
    user_type: Option<UserType>,
    #[serde(deserialize_with = "super::one_or_many")]
    status: Vec<UserStatus>,
    gender: Option<Gender>,
    age_start: Option<i32>,
    age_end: Option<i32>,
    with_description: Option<bool>,
    with_picture: Option<bool>,
    has_announcement: Option<bool>,
    has_group: Option<bool>,
    created_at_since: Option<DateTime<Utc>>,
    created_at_until: Option<DateTime<Utc>>,
    profile_filter: Option<ProfileFilter>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    filter_builder! {
        with_type => user_type: opt UserType;
        with_status => status: list UserStatus;
        with_gender => gender: opt Gender;
        with_age_start => age_start: opt i32;
        with_age_end => age_end: opt i32;
        with_description => with_description: opt bool;
        with_picture => with_picture: opt bool;
        with_has_announcement => has_announcement: opt bool;
        with_has_group => has_group: opt bool;
        with_created_at_since => created_at_since: opt DateTime<Utc>;
        with_created_at_until => created_at_until: opt DateTime<Utc>;
        with_profile_filter => profile_filter: opt ProfileFilter;
    }

    pub fn profile_filter(&self) -> Option<&ProfileFilter> {
        self.profile_filter.as_ref()
    }
}

impl Searchable for UserFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .eq("type", self.user_type)
            .is_in("status", &self.status)
            .eq("gender", self.gender)
            .range("age", self.age_start, self.age_end)
            .is_not_null_when("description", self.with_description)
            .is_not_null_when("picture", self.with_picture)
            .is_not_null_when("announcement", self.has_announcement)
            .is_not_null_when("group", self.has_group)
            .range("createdAt", self.created_at_since, self.created_at_until)
            .build()
    }

    fn associated_criteria(&self) -> Vec<Predicate> {
        Criteria::new()
            .within(
                "profile",
                self.profile_filter.as_ref().map(Searchable::build_criteria),
            )
            .build()
            .clauses()
            .to_vec()
    }
}

impl Filter for UserFilter {
    const NAME: &'static str = "user";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}
