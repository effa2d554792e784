use std::cmp::Ordering;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod criteria;

pub use criteria::Criteria;

/// A document property, dotted for nested values (`housing.roomCount`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A backend-neutral search predicate.
///
/// Filters produce a conjunction of leaf comparisons. A persistence layer
/// translates the tree into its own query language, [`Predicate::matches`]
/// evaluates it against a JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Eq(Key, Value),
    Like(Key, String),
    Gte(Key, Value),
    Lte(Key, Value),
    In(Key, Vec<Value>),
    IsNotNull(Key),
    /// A predicate scoped to the document nested under the key.
    Within(Key, Box<Predicate>),
    And(Vec<Predicate>),
    All,
}

impl Predicate {
    /// ```
    /// use coloc_core::predicate::Predicate;
    ///
    /// let predicate = Predicate::eq("status", "enabled");
    /// ```
    pub fn eq<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Eq(key.into(), value.into())
    }

    /// Case-insensitive substring match on a text property.
    ///
    /// ```
    /// use coloc_core::predicate::Predicate;
    /// use serde_json::json;
    ///
    /// let predicate = Predicate::like("location", "lyon");
    /// assert!(predicate.matches(&json!({"location": "69001 Lyon"})));
    /// ```
    pub fn like<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<String>,
    {
        Self::Like(key.into(), value.into())
    }

    pub fn gte<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Gte(key.into(), value.into())
    }

    pub fn lte<K, V>(key: K, value: V) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Lte(key.into(), value.into())
    }

    /// ```
    /// use coloc_core::predicate::Predicate;
    /// use serde_json::json;
    ///
    /// let predicate = Predicate::is_in("type", vec![json!("rent"), json!("sharing")]);
    /// assert!(predicate.matches(&json!({"type": "sharing"})));
    /// ```
    pub fn is_in<K: Into<Key>>(key: K, values: Vec<Value>) -> Self {
        Self::In(key.into(), values)
    }

    pub fn is_not_null<K: Into<Key>>(key: K) -> Self {
        Self::IsNotNull(key.into())
    }

    pub fn within<K: Into<Key>>(key: K, predicate: Predicate) -> Self {
        Self::Within(key.into(), Box::new(predicate))
    }

    pub fn and(predicates: Vec<Predicate>) -> Self {
        Self::And(predicates)
    }

    pub fn all() -> Self {
        Self::All
    }

    /// The conjunctive clauses of this predicate.
    pub fn clauses(&self) -> &[Predicate] {
        match self {
            Self::And(predicates) => predicates,
            Self::All => &[],
            leaf => std::slice::from_ref(leaf),
        }
    }

    /// True when the predicate places no constraint on a document.
    pub fn is_unconstrained(&self) -> bool {
        match self {
            Self::All => true,
            Self::And(predicates) => predicates.iter().all(Predicate::is_unconstrained),
            _ => false,
        }
    }

    /// Check if the predicate matches the document.
    ///
    /// Missing and null properties never satisfy a comparison. Arrays met
    /// along the path match when any of their elements does.
    ///
    /// ```
    /// use coloc_core::predicate::Predicate;
    /// use serde_json::json;
    ///
    /// let predicate = Predicate::and(vec![
    ///     Predicate::gte("rentPrice", 500),
    ///     Predicate::lte("rentPrice", 1000),
    /// ]);
    /// assert!(predicate.matches(&json!({"rentPrice": 650})));
    /// assert!(!predicate.matches(&json!({"rentPrice": 1200})));
    /// ```
    pub fn matches(&self, document: &Value) -> bool {
        match self {
            Self::Eq(key, expected) => resolve(document, key.as_str())
                .into_iter()
                .any(|value| compare_values(value, expected) == Some(Ordering::Equal)),
            Self::Like(key, needle) => {
                let needle = needle.to_lowercase();
                resolve(document, key.as_str()).into_iter().any(|value| {
                    value
                        .as_str()
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            }
            Self::Gte(key, bound) => resolve(document, key.as_str())
                .into_iter()
                .any(|value| compare_values(value, bound).is_some_and(Ordering::is_ge)),
            Self::Lte(key, bound) => resolve(document, key.as_str())
                .into_iter()
                .any(|value| compare_values(value, bound).is_some_and(Ordering::is_le)),
            Self::In(key, candidates) => {
                resolve(document, key.as_str()).into_iter().any(|value| {
                    candidates
                        .iter()
                        .any(|candidate| compare_values(value, candidate) == Some(Ordering::Equal))
                })
            }
            Self::IsNotNull(key) => is_present(document, key.as_str()),
            Self::Within(key, predicate) => resolve(document, key.as_str())
                .into_iter()
                .any(|nested| nested.is_object() && predicate.matches(nested)),
            Self::And(predicates) => predicates.iter().all(|p| p.matches(document)),
            Self::All => true,
        }
    }
}

/// Collect the values found under a dotted key, flattening arrays.
fn resolve<'a>(document: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut current = vec![document];
    for segment in key.split('.') {
        current = current
            .into_iter()
            .flat_map(flatten)
            .filter_map(|value| value.get(segment))
            .collect();
        if current.is_empty() {
            break;
        }
    }
    current.into_iter().flat_map(flatten).collect()
}

fn flatten(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(values) => values.iter().collect(),
        other => vec![other],
    }
}

fn is_present(document: &Value, key: &str) -> bool {
    let mut current = vec![document];
    for segment in key.split('.') {
        current = current
            .into_iter()
            .flat_map(flatten)
            .filter_map(|value| value.get(segment))
            .collect();
    }
    current.into_iter().any(|value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    })
}

/// Order two scalar JSON values of the same kind. Mixed kinds, null and
/// containers do not compare. Two RFC 3339 timestamps compare as instants,
/// whatever their offsets.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
        },
        (Value::String(a), Value::String(b)) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => Some(a.cmp(&b)),
                _ => Some(a.cmp(b)),
            }
        }
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_dotted_keys_through_arrays() {
        let document = json!({
            "members": [{"age": 22}, {"age": 31}],
            "housing": {"roomCount": 3},
        });
        assert!(Predicate::gte("members.age", 30).matches(&document));
        assert!(!Predicate::gte("members.age", 40).matches(&document));
        assert!(Predicate::eq("housing.roomCount", 3).matches(&document));
        assert!(!Predicate::eq("housing.missing", 3).matches(&document));
    }

    #[test]
    fn null_never_compares() {
        let document = json!({"rentPrice": null});
        assert!(!Predicate::gte("rentPrice", 0).matches(&document));
        assert!(!Predicate::lte("rentPrice", 0).matches(&document));
        assert!(!Predicate::is_not_null("rentPrice").matches(&document));
    }

    #[test]
    fn is_not_null_rejects_empty_values() {
        assert!(!Predicate::is_not_null("pictures").matches(&json!({"pictures": []})));
        assert!(!Predicate::is_not_null("description").matches(&json!({"description": ""})));
        assert!(Predicate::is_not_null("pictures").matches(&json!({"pictures": [{"id": 1}]})));
        assert!(Predicate::is_not_null("accepted").matches(&json!({"accepted": false})));
    }

    #[test]
    fn integers_and_floats_compare() {
        assert!(Predicate::eq("rentPrice", 500).matches(&json!({"rentPrice": 500.0})));
        assert!(Predicate::lte("rentPrice", 499.5).matches(&json!({"rentPrice": 499})));
        assert!(!Predicate::eq("rentPrice", "500").matches(&json!({"rentPrice": 500})));
    }

    #[test]
    fn within_scopes_to_nested_document() {
        let document = json!({"housing": {"type": "house", "roomCount": 4}});
        let predicate = Predicate::within(
            "housing",
            Predicate::and(vec![Predicate::eq("type", "house"), Predicate::gte("roomCount", 2)]),
        );
        assert!(predicate.matches(&document));
        assert!(!predicate.matches(&json!({"housing": null})));
    }

    #[test]
    fn clauses_of_leaf_and_all() {
        assert!(Predicate::all().clauses().is_empty());
        assert_eq!(Predicate::is_not_null("x").clauses().len(), 1);
        assert!(Predicate::and(vec![Predicate::All]).is_unconstrained());
    }
}
