use serde::{Deserialize, Serialize};

use super::{Searchable, types::HousingType};
use crate::predicate::{Criteria, Predicate};

/// Criteria on the housing embedded in an announcement. Keys are relative
/// to the housing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HousingFilter {
    #[serde(deserialize_with = "super::one_or_many")]
    types: Vec<HousingType>,
    room_count: Option<i32>,
    bedroom_count: Option<i32>,
    bathroom_count: Option<i32>,
    surface_area_min: Option<i32>,
    surface_area_max: Option<i32>,
    room_mate_count: Option<i32>,
}

impl HousingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    filter_builder! {
        with_types => types: list HousingType;
        with_room_count => room_count: opt i32;
        with_bedroom_count => bedroom_count: opt i32;
        with_bathroom_count => bathroom_count: opt i32;
        with_surface_area_min => surface_area_min: opt i32;
        with_surface_area_max => surface_area_max: opt i32;
        with_room_mate_count => room_mate_count: opt i32;
    }
}

impl Searchable for HousingFilter {
    fn build_criteria(&self) -> Predicate {
        Criteria::new()
            .is_in("type", &self.types)
            .gte("roomCount", self.room_count)
            .gte("bedroomCount", self.bedroom_count)
            .gte("bathroomCount", self.bathroom_count)
            .range("surfaceArea", self.surface_area_min, self.surface_area_max)
            .gte("roomMateCount", self.room_mate_count)
            .build()
    }
}
