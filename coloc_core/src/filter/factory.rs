use log::*;
use serde_json::{Map, Value};

use super::Filter;
use crate::error::{Error, FieldError, Result};

const EXTRA_FIELD: &str = "This form should not contain extra fields.";

/// Populates filters from raw request parameters.
pub struct FilterFactory;

impl FilterFactory {
    /// Build a filter of type `F` from a raw parameter object.
    ///
    /// Null values count as absent. Each key is checked on its own so that
    /// every invalid field is reported, then the paging constraints apply.
    ///
    /// ```
    /// use coloc_core::filter::{AnnouncementFilter, FilterFactory, Searchable};
    /// use serde_json::json;
    ///
    /// let raw = json!({"rentPriceStart": 500, "types": ["rent", "sharing"]});
    /// let filter: AnnouncementFilter = FilterFactory::build(raw.as_object().unwrap()).unwrap();
    /// assert_eq!(filter.build_criteria().clauses().len(), 2);
    /// ```
    pub fn build<F: Filter>(raw: &Map<String, Value>) -> Result<F> {
        let raw: Map<String, Value> = raw
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let known = Self::fields::<F>();

        let mut errors = Vec::new();
        for (field, value) in &raw {
            if !known.contains(field) {
                errors.push(FieldError::new(field.as_str(), EXTRA_FIELD));
                continue;
            }
            let mut single = Map::new();
            single.insert(field.clone(), value.clone());
            if let Err(err) = serde_json::from_value::<F>(Value::Object(single)) {
                errors.push(FieldError::new(field.as_str(), err.to_string()));
            }
        }

        if errors.is_empty() {
            match serde_json::from_value::<F>(Value::Object(raw)) {
                Ok(filter) => {
                    errors = filter.paging().validate();
                    if errors.is_empty() {
                        debug!("Built {} filter: {:?}", F::NAME, filter.paging());
                        return Ok(filter);
                    }
                }
                Err(err) => errors.push(FieldError::new(F::NAME, err.to_string())),
            }
        }

        Err(Error::InvalidFormData { errors })
    }

    /// The parameter names accepted by the filter type.
    pub fn fields<F: Filter>() -> Vec<String> {
        match serde_json::to_value(F::default()) {
            Ok(Value::Object(fields)) => fields.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{GroupFilter, UserFilter};

    #[test]
    fn fields_include_paging_and_nested_filters() {
        let fields = FilterFactory::fields::<UserFilter>();
        for field in ["page", "size", "order", "sort", "type", "ageStart", "profileFilter"] {
            assert!(fields.iter().any(|f| f == field), "{field}");
        }
        assert!(!FilterFactory::fields::<GroupFilter>().iter().any(|f| f == "paging"));
    }
}
