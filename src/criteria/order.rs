use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CriteriaError;

/// Sort key. Empty only for [`Order::none`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBy(String);

impl OrderBy {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort direction. `None` means no ordering was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderTypes {
    Asc,
    Desc,
    #[default]
    None,
}

impl OrderTypes {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::None => "NONE",
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for OrderTypes {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Asc, Self::Desc, Self::None]
            .into_iter()
            .find(|order_type| order_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownOrderType(s.to_string()))
    }
}

impl fmt::Display for OrderTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value-object wrapper around [`OrderTypes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderType(OrderTypes);

impl OrderType {
    #[must_use]
    pub const fn create(order_types: OrderTypes) -> Self {
        Self(order_types)
    }

    /// # Errors
    ///
    /// Returns [`CriteriaError::UnknownOrderType`] for anything other than
    /// `ASC`, `DESC` or `NONE` (ASCII case-insensitive).
    pub fn from_string(order_type: &str) -> Result<Self, CriteriaError> {
        order_type.parse().map(Self)
    }

    #[must_use]
    pub const fn order_types(self) -> OrderTypes {
        self.0
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        self.0.as_str()
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0.is_none()
    }
}

/// Sort order: a field and a direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Order {
    order_by: OrderBy,
    order_type: OrderType,
}

impl Order {
    /// # Errors
    ///
    /// Returns [`CriteriaError::EmptyOrderBy`] when a direction is requested
    /// without a field to sort on.
    pub fn create(order_by: OrderBy, order_type: OrderType) -> Result<Self, CriteriaError> {
        if order_by.is_empty() && !order_type.is_none() {
            return Err(CriteriaError::EmptyOrderBy(order_type.order_types()));
        }
        Ok(Self {
            order_by,
            order_type,
        })
    }

    /// Unsorted.
    #[must_use]
    pub fn none() -> Self {
        Self {
            order_by: OrderBy::default(),
            order_type: OrderType::create(OrderTypes::None),
        }
    }

    /// A missing `order_by` yields [`Order::none`]. A present `order_by`
    /// without `order_type` keeps the field with [`OrderTypes::None`], so no
    /// ordering is applied.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::UnknownOrderType`] for an unparseable
    /// direction, or [`CriteriaError::EmptyOrderBy`] for a direction paired
    /// with an empty field.
    pub fn from_primitives(
        order_by: Option<&str>,
        order_type: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        let Some(order_by) = order_by else {
            return Ok(Self::none());
        };
        let order_type = match order_type {
            Some(order_type) => OrderType::from_string(order_type)?,
            None => OrderType::create(OrderTypes::None),
        };
        Self::create(OrderBy::new(order_by), order_type)
    }

    #[must_use]
    pub fn order_by(&self) -> &OrderBy {
        &self.order_by
    }

    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.order_type.is_none()
    }
}
