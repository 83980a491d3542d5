//! # crudcriteria
//!
//! Storage-agnostic query criteria (filters, ordering, offset and cursor
//! pagination) and two converters that render them: raw SQL with bound
//! parameters, and Sea-ORM query parts.
//!
//! ```rust
//! use crudcriteria::converters::CriteriaConverter;
//! use crudcriteria::{Criteria, FieldMapping, SqlCriteriaConverter};
//!
//! let criteria = Criteria::from_primitives(
//!     &[],
//!     Some("createdAt"),
//!     Some("ASC"),
//!     Some(2),
//!     None,
//!     Some("2021-01-01 00:00:00"),
//! )?;
//!
//! let statement = SqlCriteriaConverter::new(["id", "name"], "table")
//!     .with_field_mapping(FieldMapping::new().with("createdAt", "created_at"))
//!     .convert(&criteria)?;
//!
//! assert_eq!(
//!     statement.to_string(),
//!     "SELECT id, name FROM table WHERE created_at > '2021-01-01 00:00:00' ORDER BY created_at ASC LIMIT 2"
//! );
//! # Ok::<(), crudcriteria::CriteriaError>(())
//! ```

pub mod converters;
pub mod criteria;
pub mod errors;
pub mod hydrators;
pub mod primitives;

pub use converters::{
    CriteriaConverter, FieldMapping, SeaOrmCriteria, SeaOrmCriteriaConverter, SqlCriteriaConverter,
};
pub use criteria::{
    Criteria, Filter, FilterField, FilterOperator, FilterValue, Filters, Order, OrderBy, OrderType,
    OrderTypes, Pagination,
};
pub use errors::CriteriaError;
pub use hydrators::Hydrators;
pub use primitives::{CriteriaPrimitives, FilterPrimitives};
