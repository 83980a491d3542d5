//! # Criteria Converters
//!
//! Two independent renderers for a [`Criteria`], with identical semantics for
//! filtering, ordering and pagination:
//!
//! - **[`SqlCriteriaConverter`]**: raw SQL text with bound parameters, as a
//!   Sea-ORM [`Statement`](sea_orm::Statement)
//! - **[`SeaOrmCriteriaConverter`]**: a [`SeaOrmCriteria`] (condition, ordering,
//!   limit/offset) applied to any Sea-ORM `Select`
//!
//! ## Clause order
//!
//! 1. filters, `AND`-ed in collection order
//! 2. cursor bound on the order field (`>` for `ASC`, `<` otherwise), when
//!    the criteria has a non-empty cursor and an order field
//! 3. `ORDER BY`, unless the order is none
//! 4. `LIMIT`/`OFFSET` in offset mode, else `LIMIT` alone in cursor mode
//!
//! ## Operator mapping
//!
//! | Operator | SQL text | Sea-ORM |
//! |---|---|---|
//! | `eq` `neq` `gt` `gte` `lt` `lte` | `= != > >= < <=` | `eq ne gt gte lt lte` |
//! | `CONTAINS` | `LIKE` bound `%v%` | `like("%v%")` |
//! | `NOT_CONTAINS` | `NOT LIKE` bound `v` | `NOT (like("%v%"))` |
//! | `STARTS_WITH` | `LIKE` bound `v%` | `like("v%")` |
//!
//! The two converters disagree on `NOT_CONTAINS` wildcards, and
//! only the Sea-ORM converter can fail with
//! [`CriteriaError::UnsupportedFilterOperator`].
//!
//! They also disagree on the cursor bound for an order field without a
//! direction: the SQL converter still emits it (with `<`), the Sea-ORM
//! converter only emits it when the order has a direction.

pub mod mapping;
pub mod orm;
pub mod sql;

pub use mapping::FieldMapping;
pub use orm::{SeaOrmCriteria, SeaOrmCriteriaConverter};
pub use sql::SqlCriteriaConverter;

use crate::criteria::Criteria;
use crate::errors::CriteriaError;

/// Renders a [`Criteria`] for one storage technology.
///
/// Implementations are pure: converting the same criteria twice yields equal
/// output.
pub trait CriteriaConverter {
    type Output;

    /// # Errors
    ///
    /// Implementation specific; see each converter.
    fn convert(&self, criteria: &Criteria) -> Result<Self::Output, CriteriaError>;
}
