use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CriteriaError;
use crate::primitives::FilterPrimitives;

/// Logical field name a filter applies to.
///
/// Free-form: whether the field exists on any schema is decided by the
/// repository through its field mapping, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilterField(String);

impl FilterField {
    /// # Errors
    ///
    /// Returns [`CriteriaError::EmptyFilterField`] when `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, CriteriaError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CriteriaError::EmptyFilterField);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FilterField {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FilterField> for String {
    fn from(field: FilterField) -> Self {
        field.0
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comparison operators for filtering.
///
/// The serialized form is the wire string accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    /// Equality (=)
    #[serde(rename = "eq")]
    Equal,
    /// Not equal (!=)
    #[serde(rename = "neq")]
    NotEqual,
    /// Greater than (>)
    #[serde(rename = "gt")]
    Gt,
    /// Greater than or equal (>=)
    #[serde(rename = "gte")]
    Gte,
    /// Less than (<)
    #[serde(rename = "lt")]
    Lt,
    /// Less than or equal (<=)
    #[serde(rename = "lte")]
    Lte,
    /// Substring match
    #[serde(rename = "CONTAINS")]
    Contains,
    /// Negated substring match
    #[serde(rename = "NOT_CONTAINS")]
    NotContains,
    /// Prefix match
    #[serde(rename = "STARTS_WITH")]
    StartsWith,
}

impl FilterOperator {
    pub const ALL: [Self; 9] = [
        Self::Equal,
        Self::NotEqual,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
    ];

    /// Wire representation, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "neq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT_CONTAINS",
            Self::StartsWith => "STARTS_WITH",
        }
    }

    /// SQL keyword or symbol for this operator.
    #[must_use]
    pub const fn operator_sql(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Contains | Self::StartsWith => "LIKE",
            Self::NotContains => "NOT LIKE",
        }
    }

    /// Whether the operator is rendered as a `LIKE` pattern match.
    #[must_use]
    pub const fn is_pattern(self) -> bool {
        matches!(self, Self::Contains | Self::NotContains | Self::StartsWith)
    }
}

impl FromStr for FilterOperator {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownFilterOperator(s.to_string()))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a predicate, kept as text until a converter hydrates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValue(String);

impl FilterValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single `(field, operator, value)` predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    field: FilterField,
    operator: FilterOperator,
    value: FilterValue,
}

impl Filter {
    #[must_use]
    pub fn create(field: FilterField, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    /// Build a filter from raw strings, parsing the operator.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::UnknownFilterOperator`] if `operator` is not
    /// one of the nine wire strings, or [`CriteriaError::EmptyFilterField`]
    /// if `field` is empty.
    pub fn from_primitives(field: &str, operator: &str, value: &str) -> Result<Self, CriteriaError> {
        Ok(Self::create(
            FilterField::new(field)?,
            operator.parse()?,
            FilterValue::new(value),
        ))
    }

    #[must_use]
    pub fn field(&self) -> &FilterField {
        &self.field
    }

    #[must_use]
    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    #[must_use]
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    #[must_use]
    pub fn to_primitives(&self) -> FilterPrimitives {
        FilterPrimitives {
            field: self.field.value().to_string(),
            operator: self.operator.as_str().to_string(),
            value: self.value.value().to_string(),
        }
    }
}

/// Ordered collection of filters, rendered left to right as an `AND` chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filters(Vec<Filter>);

impl Filters {
    #[must_use]
    pub fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Fails on the first primitive that [`Filter::from_primitives`] rejects.
    pub fn from_primitives<'a, I>(primitives: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = &'a FilterPrimitives>,
    {
        primitives
            .into_iter()
            .map(|p| Filter::from_primitives(&p.field, &p.operator, &p.value))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.0.iter()
    }

    pub fn exists(&self, predicate: impl Fn(&Filter) -> bool) -> bool {
        self.0.iter().any(predicate)
    }

    /// New collection with `filter` appended.
    #[must_use]
    pub fn with(&self, filter: Filter) -> Self {
        let mut filters = self.0.clone();
        filters.push(filter);
        Self(filters)
    }
}

impl FromIterator<Filter> for Filters {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Filters {
    type Item = Filter;
    type IntoIter = std::vec::IntoIter<Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Filters {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
