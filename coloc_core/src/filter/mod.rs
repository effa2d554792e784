use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::FieldError,
    page::{Direction, Order, PageRequest, Sort},
    predicate::Predicate,
};

/// Generates by-value builder methods for optional and list filter fields.
macro_rules! filter_builder {
    ($($setter:ident => $field:ident: $kind:ident $ty:ty;)*) => {
        $(filter_builder!(@$kind $setter, $field, $ty);)*
    };
    (@opt $setter:ident, $field:ident, $ty:ty) => {
        pub fn $setter(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
    (@text $setter:ident, $field:ident, $ty:ty) => {
        pub fn $setter<S: Into<$ty>>(mut self, value: S) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (@list $setter:ident, $field:ident, $ty:ty) => {
        pub fn $setter(mut self, values: Vec<$ty>) -> Self {
            self.$field = values;
            self
        }
    };
}

pub mod announcement;
pub mod factory;
pub mod group;
pub mod housing;
pub mod invitation;
pub mod kind;
pub mod profile;
pub mod types;
pub mod user;
pub mod visit;

pub use announcement::{AnnouncementCriteria, AnnouncementFilter, HistoricAnnouncementFilter};
pub use factory::FilterFactory;
pub use group::GroupFilter;
pub use housing::HousingFilter;
pub use invitation::InvitationFilter;
pub use kind::FilterKind;
pub use profile::ProfileFilter;
pub use user::UserFilter;
pub use visit::VisitFilter;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

/// Accept either a single value or a list for list fields, as query
/// strings carry single values unwrapped.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// Anything that turns its fields into a search predicate.
pub trait Searchable {
    /// The conjunction of the clauses contributed by the set fields. Nested
    /// sub-filters are not merged in.
    fn build_criteria(&self) -> Predicate;

    /// Clauses for nested sub-filters, each scoped to its embedded document.
    fn associated_criteria(&self) -> Vec<Predicate> {
        Vec::new()
    }

    /// The own criteria followed by the associated criteria.
    fn full_criteria(&self) -> Predicate {
        let mut clauses = self.build_criteria().clauses().to_vec();
        clauses.extend(self.associated_criteria());
        Predicate::And(clauses)
    }
}

/// A top level filter, populated from request parameters and carrying paging.
pub trait Filter: Searchable + Default + Serialize + DeserializeOwned {
    /// Name of the resource the filter searches.
    const NAME: &'static str;

    fn paging(&self) -> &PagingSpec;

    fn pageable(&self) -> PageRequest {
        self.paging().pageable()
    }
}

/// Paging parameters embedded in every filter. `sort` names a single
/// property that `order` applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagingSpec {
    page: i64,
    size: i64,
    order: Direction,
    sort: String,
}

impl PagingSpec {
    pub const DEFAULT_SORT: &'static str = "createdAt";

    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn with_order(mut self, order: Direction) -> Self {
        self.order = order;
        self
    }

    pub fn with_sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn order(&self) -> Direction {
        self.order
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    /// The page request for these parameters, unsorted when `sort` is blank.
    ///
    /// ```
    /// use coloc_core::filter::PagingSpec;
    /// use coloc_core::page::{Direction, Pageable};
    ///
    /// let request = PagingSpec::new(2, 10).with_order(Direction::Descending).pageable();
    /// assert_eq!(request.offset(), 10);
    /// assert_eq!(request.sort().to_mapping()["createdAt"], "desc");
    /// ```
    pub fn pageable(&self) -> PageRequest {
        let sort = if self.sort.is_empty() {
            Sort::unsorted()
        } else {
            Sort::from(Order::with_direction(self.sort.as_str(), self.order))
        };
        PageRequest::new(self.page, self.size, sort)
    }

    /// Form constraints on the paging parameters.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.page < 1 {
            errors.push(FieldError::new(
                "page",
                "This value should be greater than or equal to 1.",
            ));
        }
        if self.size < 1 {
            errors.push(FieldError::new(
                "size",
                "This value should be greater than or equal to 1.",
            ));
        }
        errors
    }
}

impl Default for PagingSpec {
    fn default() -> Self {
        Self {
            page: PageRequest::DEFAULT_PAGE,
            size: PageRequest::DEFAULT_SIZE,
            order: Direction::Ascending,
            sort: Self::DEFAULT_SORT.to_string(),
        }
    }
}

/// The criteria and page window handed to the query layer for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub resource: &'static str,
    pub criteria: Predicate,
    pub pageable: PageRequest,
}

impl SearchRequest {
    pub fn from_filter<F: Filter>(filter: &F) -> Self {
        Self {
            resource: F::NAME,
            criteria: filter.full_criteria(),
            pageable: filter.pageable(),
        }
    }
}
