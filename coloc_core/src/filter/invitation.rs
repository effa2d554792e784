use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Filter, PagingSpec, Searchable, types::InvitationSource};
use crate::predicate::{Criteria, Predicate};

/// Search over invitations to join an announcement or a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvitationFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    #[serde(deserialize_with = "super::one_or_many")]
    source_types: Vec<InvitationSource>,
    has_message: Option<bool>,
    accepted: Option<bool>,
    invitable_id: Option<i64>,
    recipient_id: Option<i64>,
    created_at_since: Option<DateTime<Utc>>,
    created_at_until: Option<DateTime<Utc>>,
}

impl InvitationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    filter_builder! {
        with_source_types => source_types: list InvitationSource;
        with_has_message => has_message: opt bool;
        with_accepted => accepted: opt bool;
        with_invitable_id => invitable_id: opt i64;
        with_recipient_id => recipient_id: opt i64;
        with_created_at_since => created_at_since: opt DateTime<Utc>;
        with_created_at_until => created_at_until: opt DateTime<Utc>;
    }
}

impl Searchable for InvitationFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .is_in("sourceType", &self.source_types)
            .is_not_null_when("message", self.has_message)
            .eq("accepted", self.accepted)
            .eq("invitableId", self.invitable_id)
            .eq("recipientId", self.recipient_id)
            .range("createdAt", self.created_at_since, self.created_at_until)
            .build()
    }
}

impl Filter for InvitationFilter {
    const NAME: &'static str = "invitation";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}
