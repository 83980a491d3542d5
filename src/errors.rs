//! # Criteria Errors
//!
//! Every failure in this crate is a value-construction or translation-time
//! failure. None of them are transient, so none are retried: they surface to
//! whoever supplied the bad input.
//!
//! | Variant | Raised by |
//! |---|---|
//! | [`CriteriaError::UnknownFilterOperator`] | parsing a filter operator string |
//! | [`CriteriaError::UnknownOrderType`] | parsing an order direction string |
//! | [`CriteriaError::EmptyFilterField`] | building a [`FilterField`](crate::FilterField) |
//! | [`CriteriaError::EmptyOrderBy`] | building a directed [`Order`](crate::Order) without a field |
//! | [`CriteriaError::InvalidPaginationConfiguration`] | building a [`Criteria`](crate::Criteria), or asking it for an offset |
//! | [`CriteriaError::UnsupportedFilterOperator`] | the Sea-ORM converter only |
//! | [`CriteriaError::Hydration`] | a hydrator rejecting a raw value |
//! | [`CriteriaError::Malformed`] | decoding criteria primitives from JSON |

use thiserror::Error;

use crate::criteria::{FilterOperator, OrderTypes};

/// Error returned by a hydrator function.
pub type HydrationError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("Unknown filter operator '{0}'")]
    UnknownFilterOperator(String),

    #[error("Unknown order type '{0}'")]
    UnknownOrderType(String),

    #[error("Filter field cannot be empty")]
    EmptyFilterField,

    #[error("Order by field cannot be empty when order type is {0}")]
    EmptyOrderBy(OrderTypes),

    #[error("Invalid pagination configuration: {0}")]
    InvalidPaginationConfiguration(&'static str),

    #[error("Filter operator {operator} is not supported for field '{field}'")]
    UnsupportedFilterOperator {
        field: String,
        operator: FilterOperator,
    },

    #[error("Cannot hydrate value '{value}' for field '{field}': {source}")]
    Hydration {
        field: String,
        value: String,
        #[source]
        source: HydrationError,
    },

    #[error("Malformed criteria primitives: {0}")]
    Malformed(#[from] serde_json::Error),
}
