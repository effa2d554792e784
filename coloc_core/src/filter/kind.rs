use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    AnnouncementFilter, Filter, FilterFactory, GroupFilter, HistoricAnnouncementFilter,
    InvitationFilter, SearchRequest, UserFilter, VisitFilter,
};
use crate::error::{Error, Result};

/// The searchable resources, for callers that pick the filter at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Announcement,
    HistoricAnnouncement,
    Group,
    User,
    Invitation,
    Visit,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        Self::Announcement,
        Self::HistoricAnnouncement,
        Self::Group,
        Self::User,
        Self::Invitation,
        Self::Visit,
    ];

    /// The resource name, also the collection searched by default.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Announcement => AnnouncementFilter::NAME,
            Self::HistoricAnnouncement => HistoricAnnouncementFilter::NAME,
            Self::Group => GroupFilter::NAME,
            Self::User => UserFilter::NAME,
            Self::Invitation => InvitationFilter::NAME,
            Self::Visit => VisitFilter::NAME,
        }
    }

    /// Build the filter named by this kind and turn it into a search request.
    pub fn search_request(&self, raw: &Map<String, Value>) -> Result<SearchRequest> {
        let request = match self {
            Self::Announcement => request::<AnnouncementFilter>(raw)?,
            Self::HistoricAnnouncement => request::<HistoricAnnouncementFilter>(raw)?,
            Self::Group => request::<GroupFilter>(raw)?,
            Self::User => request::<UserFilter>(raw)?,
            Self::Invitation => request::<InvitationFilter>(raw)?,
            Self::Visit => request::<VisitFilter>(raw)?,
        };
        Ok(request)
    }

    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::Announcement => FilterFactory::fields::<AnnouncementFilter>(),
            Self::HistoricAnnouncement => FilterFactory::fields::<HistoricAnnouncementFilter>(),
            Self::Group => FilterFactory::fields::<GroupFilter>(),
            Self::User => FilterFactory::fields::<UserFilter>(),
            Self::Invitation => FilterFactory::fields::<InvitationFilter>(),
            Self::Visit => FilterFactory::fields::<VisitFilter>(),
        }
    }
}

fn request<F: Filter>(raw: &Map<String, Value>) -> Result<SearchRequest> {
    let filter: F = FilterFactory::build(raw)?;
    Ok(SearchRequest::from_filter(&filter))
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown filter kind \"{s}\"")))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
