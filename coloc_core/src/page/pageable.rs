use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::sort::Sort;
use crate::error::{Error, Result};

/// A window over an ordered result set.
///
/// Pages are 1-based. Signs are not checked here, rejecting a zero page or a
/// negative size is left to the form layer. The offset saturates at the `i64`
/// bounds.
pub trait Pageable {
    fn page(&self) -> i64;

    fn size(&self) -> i64;

    fn sort(&self) -> &Sort;

    fn offset(&self) -> i64 {
        self.page().saturating_sub(1).saturating_mul(self.size())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: i64,
    size: i64,
    sort: Sort,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_SIZE: i64 = 20;

    pub fn new(page: i64, size: i64, sort: Sort) -> Self {
        Self { page, size, sort }
    }

    /// An unsorted request for `page` of `size` elements.
    ///
    /// ```
    /// use coloc_core::page::{PageRequest, Pageable};
    ///
    /// assert_eq!(PageRequest::of(3, 10).offset(), 20);
    /// ```
    pub fn of(page: i64, size: i64) -> Self {
        Self::new(page, size, Sort::unsorted())
    }

    /// Build a request from a raw parameter object holding `page`, `size` and
    /// `sort`. Every key is required.
    pub fn create(params: &Map<String, Value>) -> Result<Self> {
        let page = integer_param(params, "page")?;
        let size = integer_param(params, "size")?;
        let sort = match required(params, "sort")? {
            Value::Object(mapping) => Sort::from_mapping(mapping)?,
            other => {
                return Err(Error::invalid_argument(format!(
                    "`sort` must be an object, got {other}"
                )));
            }
        };
        Ok(Self::new(page, size, sort))
    }

    pub fn first(&self) -> Self {
        Self::new(Self::DEFAULT_PAGE, self.size, self.sort.clone())
    }

    pub fn next(&self) -> Self {
        Self::new(self.page + 1, self.size, self.sort.clone())
    }

    /// The previous page, staying on the first page once reached.
    pub fn previous(&self) -> Self {
        if self.page <= Self::DEFAULT_PAGE {
            return self.first();
        }
        Self::new(self.page - 1, self.size, self.sort.clone())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_SIZE, Sort::unsorted())
    }
}

impl Pageable for PageRequest {
    fn page(&self) -> i64 {
        self.page
    }

    fn size(&self) -> i64 {
        self.size
    }

    fn sort(&self) -> &Sort {
        &self.sort
    }
}

fn required<'a>(params: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    params
        .get(key)
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

fn integer_param(params: &Map<String, Value>, key: &str) -> Result<i64> {
    let value = required(params, key)?;
    value
        .as_i64()
        .ok_or_else(|| Error::invalid_argument(format!("`{key}` must be an integer, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn previous_saturates_on_first_page() {
        let request = PageRequest::of(2, 10);
        assert_eq!(request.previous().page(), 1);
        assert_eq!(request.previous().previous().page(), 1);
        assert_eq!(request.next().offset(), 20);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        assert_eq!(PageRequest::of(i64::MAX, 4).offset(), i64::MAX);
        assert_eq!(PageRequest::of(i64::MIN, 4).offset(), i64::MIN);
        assert_eq!(PageRequest::of(0, 10).offset(), -10);
    }

    #[test]
    fn create_rejects_wrong_types() {
        let params = json!({"page": "two", "size": 5, "sort": {}});
        let err = PageRequest::create(params.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let params = json!({"page": 2, "size": 5, "sort": ["title"]});
        let err = PageRequest::create(params.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
