use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::CriteriaError;

/// Logical field name -> physical column name.
///
/// Unmapped names pass through unchanged. A physical name containing dots
/// (`timestamps.created_at`) is treated as table-qualified by the Sea-ORM
/// converter; the last segment is the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping(HashMap<String, String>);

impl FieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, returning the extended table.
    #[must_use]
    pub fn with(mut self, logical: impl Into<String>, physical: impl Into<String>) -> Self {
        self.0.insert(logical.into(), physical.into());
        self
    }

    /// Load a mapping from a JSON object such as `{"createdAt": "created_at"}`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Malformed`] if `json` is not a string-to-string object.
    pub fn from_json(json: &str) -> Result<Self, CriteriaError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn resolve<'a>(&'a self, logical: &'a str) -> &'a str {
        self.0.get(logical).map_or(logical, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(logical, physical)| (logical.into(), physical.into()))
                .collect(),
        )
    }
}
