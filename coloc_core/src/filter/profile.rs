use serde::{Deserialize, Serialize};

use super::{
    Searchable,
    types::{Diet, MaritalStatus, SocialStatus},
};
use crate::predicate::{Criteria, Predicate};

/// Criteria on the profile embedded in a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfileFilter {
    smoker: Option<bool>,
    has_job: Option<bool>,
    diet: Option<Diet>,
    marital_status: Option<MaritalStatus>,
    social_status: Option<SocialStatus>,
}

impl ProfileFilter {
    pub fn new() -> Self {
        Self::default()
    }

    filter_builder! {
        with_smoker => smoker: opt bool;
        with_has_job => has_job: opt bool;
        with_diet => diet: opt Diet;
        with_marital_status => marital_status: opt MaritalStatus;
        with_social_status => social_status: opt SocialStatus;
    }
}

impl Searchable for ProfileFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .eq("smoker", self.smoker)
            .eq("hasJob", self.has_job)
            .eq("diet", self.diet)
            .eq("maritalStatus", self.marital_status)
            .eq("socialStatus", self.social_status)
            .build()
    }
}
