use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::order::{Direction, Order};
use crate::error::{Error, Result};

/// An ordered list of sort instructions. The first order is the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sort(Vec<Order>);

impl Sort {
    /// An empty sort, leaving the order to the query layer.
    pub fn unsorted() -> Self {
        Self(Vec::new())
    }

    pub fn by(orders: Vec<Order>) -> Self {
        Self(orders)
    }

    /// Create a sort from `(property, direction)` pairs, keeping their order.
    ///
    /// ```
    /// use coloc_core::page::Sort;
    ///
    /// let sort = Sort::create([("rentPrice", "desc"), ("createdAt", "ASC")]).unwrap();
    /// assert_eq!(sort.orders()[0].property(), "rentPrice");
    /// assert!(Sort::create([("rentPrice", "down")]).is_err());
    /// ```
    pub fn create<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        mapping
            .into_iter()
            .map(|(property, direction)| Order::new(property, direction.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Create a sort from a raw JSON object of `property: "asc" | "desc"`.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self> {
        mapping
            .iter()
            .map(|(property, direction)| match direction.as_str() {
                Some(direction) => Order::new(property.as_str(), direction),
                None => Err(Error::invalid_argument(format!(
                    "Direction of \"{property}\" must be a string"
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn ascending<I, P>(properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::uniform(properties, Direction::Ascending)
    }

    pub fn descending<I, P>(properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::uniform(properties, Direction::Descending)
    }

    fn uniform<I, P>(properties: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self(
            properties
                .into_iter()
                .map(|property| Order::with_direction(property, direction))
                .collect(),
        )
    }

    /// Append the orders of `other` after the orders of `self`.
    pub fn and(mut self, other: Sort) -> Self {
        self.0.extend(other.0);
        self
    }

    /// The orders as an ordered `property -> direction` object.
    ///
    /// A property listed twice keeps its first position and takes the later
    /// direction.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        for order in &self.0 {
            mapping.insert(
                order.property().to_string(),
                Value::String(order.direction().as_str().to_string()),
            );
        }
        mapping
    }

    pub fn orders(&self) -> &[Order] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Order> for Sort {
    fn from(order: Order) -> Self {
        Self(vec![order])
    }
}
