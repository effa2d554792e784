use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Filter, HousingFilter, PagingSpec, Searchable,
    types::{AnnouncementStatus, AnnouncementType},
};
use crate::predicate::{Criteria, Predicate};

/// Fields shared by current and historic announcement searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementCriteria {
    rent_price_start: Option<i64>,
    rent_price_end: Option<i64>,
    #[serde(deserialize_with = "super::one_or_many")]
    types: Vec<AnnouncementType>,
    location: Option<String>,
    start_date_after: Option<NaiveDate>,
    start_date_before: Option<NaiveDate>,
    end_date_after: Option<NaiveDate>,
    end_date_before: Option<NaiveDate>,
}

impl AnnouncementCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    filter_builder! {
        with_rent_price_start => rent_price_start: opt i64;
        with_rent_price_end => rent_price_end: opt i64;
        with_types => types: list AnnouncementType;
        with_location => location: text String;
        with_start_date_after => start_date_after: opt NaiveDate;
        with_start_date_before => start_date_before: opt NaiveDate;
        with_end_date_after => end_date_after: opt NaiveDate;
        with_end_date_before => end_date_before: opt NaiveDate;
    }

    fn apply(&self, criteria: Criteria) -> Criteria {
        criteria
            .range("rentPrice", self.rent_price_start, self.rent_price_end)
            .is_in("type", &self.types)
            .like("location", self.location.as_deref())
            .range("startDate", self.start_date_after, self.start_date_before)
            .range("endDate", self.end_date_after, self.end_date_before)
    }
}

macro_rules! announcement_criteria_builder {
    ($($setter:ident: $ty:ty;)*) => {
        $(
            pub fn $setter(mut self, value: $ty) -> Self {
                self.announcement = self.announcement.$setter(value);
                self
            }
        )*
    };
}

/// Search over published announcements.
///
/// ```
/// use coloc_core::filter::{AnnouncementFilter, Searchable};
///
/// let filter = AnnouncementFilter::new()
///     .with_rent_price_start(500)
///     .with_pictures(true);
/// assert_eq!(filter.build_criteria().clauses().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnouncementFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    #[serde(flatten)]
    announcement: AnnouncementCriteria,
    with_description: Option<bool>,
    with_pictures: Option<bool>,
    #[serde(deserialize_with = "super::one_or_many")]
    status: Vec<AnnouncementStatus>,
    created_at_since: Option<DateTime<Utc>>,
    housing_filter: Option<HousingFilter>,
}

impl AnnouncementFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    announcement_criteria_builder! {
        with_rent_price_start: i64;
        with_rent_price_end: i64;
        with_types: Vec<AnnouncementType>;
        with_location: String;
        with_start_date_after: NaiveDate;
        with_start_date_before: NaiveDate;
        with_end_date_after: NaiveDate;
        with_end_date_before: NaiveDate;
    }

    filter_builder! {
        with_description => with_description: opt bool;
        with_pictures => with_pictures: opt bool;
        with_status => status: list AnnouncementStatus;
        with_created_at_since => created_at_since: opt DateTime<Utc>;
        with_housing_filter => housing_filter: opt HousingFilter;
    }

    pub fn housing_filter(&self) -> Option<&HousingFilter> {
        self.housing_filter.as_ref()
    }
}

impl Searchable for AnnouncementFilter {
    fn build_criteria(&self) -> Predicate {
        self.announcement
            .apply(Criteria::new())
            .is_not_null_when("description", self.with_description)
            .is_not_null_when("pictures", self.with_pictures)
            .is_in("status", &self.status)
            .gte("createdAt", self.created_at_since)
            .build()
    }

    fn associated_criteria(&self) -> Vec<Predicate> {
        Criteria::new()
            .within(
                "housing",
                self.housing_filter.as_ref().map(Searchable::build_criteria),
            )
            .build()
            .clauses()
            .to_vec()
    }
}

impl Filter for AnnouncementFilter {
    const NAME: &'static str = "announcement";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}

/// Search over announcements archived once their creator removed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricAnnouncementFilter {
    #[serde(flatten)]
    paging: PagingSpec,
    #[serde(flatten)]
    announcement: AnnouncementCriteria,
    creator_id: Option<i64>,
    with_comments: Option<bool>,
    created_at_since: Option<DateTime<Utc>>,
    created_at_until: Option<DateTime<Utc>>,
}

impl HistoricAnnouncementFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paging(mut self, paging: PagingSpec) -> Self {
        self.paging = paging;
        self
    }

    announcement_criteria_builder! {
        with_rent_price_start: i64;
        with_rent_price_end: i64;
        with_types: Vec<AnnouncementType>;
        with_location: String;
        with_start_date_after: NaiveDate;
        with_start_date_before: NaiveDate;
        with_end_date_after: NaiveDate;
        with_end_date_before: NaiveDate;
    }

    filter_builder! {
        with_creator_id => creator_id: opt i64;
        with_comments => with_comments: opt bool;
        with_created_at_since => created_at_since: opt DateTime<Utc>;
        with_created_at_until => created_at_until: opt DateTime<Utc>;
    }
}

impl Searchable for HistoricAnnouncementFilter {
    fn build_criteria(&self) -> Predicate {
        self.announcement
            .apply(Criteria::new())
            .eq("creatorId", self.creator_id)
            .is_not_null_when("comments", self.with_comments)
            .range("createdAt", self.created_at_since, self.created_at_until)
            .build()
    }
}

impl Filter for HistoricAnnouncementFilter {
    const NAME: &'static str = "historic_announcement";

    fn paging(&self) -> &PagingSpec {
        &self.paging
    }
}
