use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sort direction shared by every sort instruction and legacy filter order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Lower case wire form, `asc` or `desc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// ```
    /// use coloc_core::page::Direction;
    ///
    /// assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Descending);
    /// assert!("up".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Descending)
        } else {
            Err(Error::invalid_argument(format!(
                "Invalid direction \"{s}\", expected \"asc\" or \"desc\""
            )))
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single sort instruction: a property and the direction to sort it by.
///
/// The property is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct Order {
    property: String,
    direction: Direction,
}

#[derive(Deserialize)]
struct RawOrder {
    property: String,
    direction: Direction,
}

impl TryFrom<RawOrder> for Order {
    type Error = Error;

    fn try_from(raw: RawOrder) -> Result<Self> {
        check_property(&raw.property)?;
        Ok(Self {
            property: raw.property,
            direction: raw.direction,
        })
    }
}

fn check_property(property: &str) -> Result<()> {
    if property.is_empty() {
        return Err(Error::invalid_argument("Sort property must not be empty"));
    }
    Ok(())
}

impl Order {
    /// Create an order from a raw direction string, compared case-insensitively.
    ///
    /// ```
    /// use coloc_core::page::{Direction, Order};
    ///
    /// let order = Order::new("rentPrice", "DESC").unwrap();
    /// assert_eq!(order.direction(), Direction::Descending);
    /// assert_eq!(order.direction().as_str(), "desc");
    /// ```
    pub fn new<P: Into<String>>(property: P, direction: &str) -> Result<Self> {
        let property = property.into();
        check_property(&property)?;
        Ok(Self {
            property,
            direction: direction.parse()?,
        })
    }

    pub fn asc<P: Into<String>>(property: P) -> Self {
        Self::with_direction(property, Direction::Ascending)
    }

    pub fn desc<P: Into<String>>(property: P) -> Self {
        Self::with_direction(property, Direction::Descending)
    }

    /// Infallible constructor for properties known at compile time.
    ///
    /// Panics in debug builds when `property` is empty, use [`Order::new`]
    /// for untrusted input.
    pub fn with_direction<P: Into<String>>(property: P, direction: Direction) -> Self {
        let property = property.into();
        debug_assert!(
            check_property(&property).is_ok(),
            "Sort property must not be empty"
        );
        Self { property, direction }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == Direction::Ascending
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.property, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_case_insensitive() {
        for raw in ["asc", "ASC", "Asc", "aSc"] {
            let order = Order::new("createdAt", raw).unwrap();
            assert_eq!(order.direction(), Direction::Ascending);
            assert_eq!(order.direction().as_str(), "asc");
        }
        assert_eq!(
            Order::new("createdAt", "Desc").unwrap(),
            Order::desc("createdAt")
        );
    }

    #[test]
    fn rejects_unknown_direction() {
        for raw in ["", "ascending", "up", "des", " asc"] {
            let err = Order::new("createdAt", raw).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{raw}");
        }
    }

    #[test]
    fn rejects_empty_property() {
        assert!(matches!(
            Order::new("", "asc"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserializing_rejects_empty_property() {
        let raw = serde_json::json!({"property": "", "direction": "asc"});
        assert!(serde_json::from_value::<Order>(raw).is_err());

        let raw = serde_json::json!({"property": "title", "direction": "DESC"});
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order, Order::desc("title"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Sort property must not be empty")]
    fn infallible_constructors_assert_non_empty_property() {
        let _ = Order::asc("");
    }

    #[test]
    fn direction_serializes_lower_case() {
        let value = serde_json::to_value(Order::desc("title")).unwrap();
        assert_eq!(value, serde_json::json!({"property": "title", "direction": "desc"}));

        let direction: Direction = serde_json::from_value(serde_json::json!("ASC")).unwrap();
        assert_eq!(direction, Direction::Ascending);
    }
}
