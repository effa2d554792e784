use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Filter, PagingSpec, Searchable, types::GroupStatus};
use crate::predicate::{Criteria, Predicate};

/// Search over groups of roommates looking for a housing together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    name: Option<String>,
    budget_min: Option<i64>,
    budget_max: Option<i64>,
    #[serde(deserialize_with = "super::one_or_many")]
    status: Vec<GroupStatus>,
    with_description: Option<bool>,
    with_picture: Option<bool>,
    count_members: Option<i32>,
    created_at_since: Option<DateTime<Utc>>,
    created_at_until: Option<DateTime<Utc>>,
}

impl GroupFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    filter_builder! {
        with_name => name: text String;
        with_budget_min => budget_min: opt i64;
        with_budget_max => budget_max: opt i64;
        with_status => status: list GroupStatus;
        with_description => with_description: opt bool;
        with_picture => with_picture: opt bool;
        with_count_members => count_members: opt i32;
        with_created_at_since => created_at_since: opt DateTime<Utc>;
        with_created_at_until => created_at_until: opt DateTime<Utc>;
    }
}

impl Searchable for GroupFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .like("name", self.name.as_deref())
            .range("budget", self.budget_min, self.budget_max)
            .is_in("status", &self.status)
            .is_not_null_when("description", self.with_description)
            .is_not_null_when("picture", self.with_picture)
            .gte("countMembers", self.count_members)
            .range("createdAt", self.created_at_since, self.created_at_until)
            .build()
    }
}

impl Filter for GroupFilter {
    const NAME: &'static str = "group";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}
