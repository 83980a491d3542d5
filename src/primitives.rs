use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;
use crate::errors::CriteriaError;

/// Raw `{field, operator, value}` triple as received from the application layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPrimitives {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterPrimitives {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Unvalidated criteria input.
///
/// ```json
/// {
///   "filters": [{"field": "name", "operator": "eq", "value": "Peter"}],
///   "orderBy": "createdAt",
///   "orderType": "DESC",
///   "pageSize": 10,
///   "cursor": "2021-01-01 00:00:00"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaPrimitives {
    #[serde(default)]
    pub filters: Vec<FilterPrimitives>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl CriteriaPrimitives {
    /// # Errors
    ///
    /// Returns [`CriteriaError::Malformed`] if `json` does not match the
    /// primitives shape.
    pub fn from_json(json: &str) -> Result<Self, CriteriaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode and validate in one step.
    ///
    /// # Errors
    ///
    /// Any decoding error, then any error of [`Criteria::from_primitives`].
    pub fn parse_criteria(json: &str) -> Result<Criteria, CriteriaError> {
        Self::from_json(json)?.try_into()
    }
}
