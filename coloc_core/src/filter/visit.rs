use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Filter, PagingSpec, Searchable, types::VisitableKind};
use crate::predicate::{Criteria, Predicate};

/// Search over visits of announcement, group and user pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    visitor_id: Option<i64>,
    visited_id: Option<i64>,
    visited_class: Option<VisitableKind>,
    visited_at_since: Option<DateTime<Utc>>,
    visited_at_until: Option<DateTime<Utc>>,
}

impl VisitFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    filter_builder! {
        with_visitor_id => visitor_id: opt i64;
        with_visited_id => visited_id: opt i64;
        with_visited_class => visited_class: opt VisitableKind;
        with_visited_at_since => visited_at_since: opt DateTime<Utc>;
        with_visited_at_until => visited_at_until: opt DateTime<Utc>;
    }
}

impl Searchable for VisitFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .eq("visitorId", self.visitor_id)
            .eq("visitedId", self.visited_id)
            .eq("visitedClass", self.visited_class)
            .range("visitedAt", self.visited_at_since, self.visited_at_until)
            .build()
    }
}

impl Filter for VisitFilter {
    const NAME: &'static str = "visit";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}
