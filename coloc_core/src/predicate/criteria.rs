use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use log::*;
use serde_json::Value;

use super::{Key, Predicate};

/// A value that can be compared inside a predicate.
pub trait CriteriaValue {
    fn to_criteria_value(&self) -> Value;
}

macro_rules! json_criteria_value {
    ($($ty:ty),*) => {
        $(
            impl CriteriaValue for $ty {
                fn to_criteria_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

json_criteria_value!(i32, i64, u32, u64, f64, bool);

impl CriteriaValue for str {
    fn to_criteria_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl CriteriaValue for String {
    fn to_criteria_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl CriteriaValue for NaiveDate {
    fn to_criteria_value(&self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl CriteriaValue for DateTime<Utc> {
    fn to_criteria_value(&self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: CriteriaValue + ?Sized> CriteriaValue for &T {
    fn to_criteria_value(&self) -> Value {
        (**self).to_criteria_value()
    }
}

/// Accumulates conjunctive clauses from optional filter fields.
///
/// Every optional method adds its clause only when the field carries a
/// value, so an empty filter builds an empty conjunction.
///
/// ```
/// use coloc_core::predicate::{Criteria, Predicate};
///
/// let predicate = Criteria::new()
///     .gte("rentPrice", Some(500))
///     .lte("rentPrice", None::<i64>)
///     .is_in("type", &["rent", "sharing"])
///     .is_not_null_when("pictures", Some(false))
///     .build();
///
/// assert_eq!(predicate.clauses().len(), 2);
/// assert_eq!(predicate.clauses()[0], Predicate::gte("rentPrice", 500));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    clauses: Vec<Predicate>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause unconditionally.
    pub fn push(mut self, predicate: Predicate) -> Self {
        self.clauses.push(predicate);
        self
    }

    pub fn eq<K, V>(self, key: K, value: Option<V>) -> Self
    where
        K: Into<Key>,
        V: CriteriaValue,
    {
        match value {
            Some(value) => self.push(Predicate::Eq(key.into(), value.to_criteria_value())),
            None => self,
        }
    }

    pub fn like<K, S>(self, key: K, value: Option<S>) -> Self
    where
        K: Into<Key>,
        S: AsRef<str>,
    {
        match value {
            Some(value) => self.push(Predicate::like(key, value.as_ref())),
            None => self,
        }
    }

    pub fn gte<K, V>(self, key: K, bound: Option<V>) -> Self
    where
        K: Into<Key>,
        V: CriteriaValue,
    {
        match bound {
            Some(bound) => self.push(Predicate::Gte(key.into(), bound.to_criteria_value())),
            None => self,
        }
    }

    pub fn lte<K, V>(self, key: K, bound: Option<V>) -> Self
    where
        K: Into<Key>,
        V: CriteriaValue,
    {
        match bound {
            Some(bound) => self.push(Predicate::Lte(key.into(), bound.to_criteria_value())),
            None => self,
        }
    }

    /// Add the lower then the upper bound of a range. Bounds are independent
    /// and are not checked against each other.
    pub fn range<K, V>(self, key: K, min: Option<V>, max: Option<V>) -> Self
    where
        K: Into<Key>,
        V: CriteriaValue,
    {
        let key = key.into();
        self.gte(key.clone(), min).lte(key, max)
    }

    /// Add an `In` clause holding the values in order, unless the list is empty.
    pub fn is_in<K, V>(self, key: K, values: &[V]) -> Self
    where
        K: Into<Key>,
        V: CriteriaValue,
    {
        if values.is_empty() {
            return self;
        }
        let values = values.iter().map(CriteriaValue::to_criteria_value).collect();
        self.push(Predicate::In(key.into(), values))
    }

    /// Require the property to be set when the flag is `true`. There is no
    /// clause for a `false` flag.
    pub fn is_not_null_when<K: Into<Key>>(self, key: K, flag: Option<bool>) -> Self {
        if flag == Some(true) {
            self.push(Predicate::is_not_null(key))
        } else {
            self
        }
    }

    /// Scope a nested predicate to a property, skipped when it is unconstrained.
    pub fn within<K: Into<Key>>(self, key: K, predicate: Option<Predicate>) -> Self {
        match predicate {
            Some(predicate) if !predicate.is_unconstrained() => {
                self.push(Predicate::within(key, predicate))
            }
            _ => self,
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The conjunction of the clauses, in the order they were added.
    pub fn build(self) -> Predicate {
        trace!("Built criteria with {} clause(s): {:?}", self.clauses.len(), self.clauses);
        Predicate::And(self.clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_adds_only_present_bounds() {
        let lower = Criteria::new().range("age", Some(18), None).build();
        assert_eq!(lower.clauses(), &[Predicate::gte("age", 18)]);

        let both = Criteria::new().range("age", Some(30), Some(18)).build();
        assert_eq!(
            both.clauses(),
            &[Predicate::gte("age", 30), Predicate::lte("age", 18)]
        );

        let none = Criteria::new().range::<_, i64>("age", None, None).build();
        assert!(none.clauses().is_empty());
    }

    #[test]
    fn dates_render_as_iso_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let predicate = Criteria::new().gte("startDate", Some(date)).build();
        assert_eq!(predicate.clauses(), &[Predicate::gte("startDate", "2024-09-01")]);
    }

    #[test]
    fn within_skips_unconstrained_nested_predicate() {
        let criteria = Criteria::new()
            .within("housing", Some(Predicate::and(vec![])))
            .within("profile", None);
        assert!(criteria.is_empty());
    }
}
