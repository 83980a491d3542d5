//! # Query Criteria
//!
//! Storage-agnostic description of a list query: which rows to keep, how to
//! order them, and which page to return. A [`Criteria`] is built once per
//! request, handed to a repository, and rendered by one of the
//! [`converters`](crate::converters).
//!
//! ## Pagination modes
//!
//! - **Unpaginated**: no page size, or a page size with neither page number nor cursor
//! - **Offset**: page size + page number, rendered as `LIMIT n OFFSET m`
//! - **Cursor**: page size + cursor, rendered as a bound on the ordered field
//!   plus `LIMIT n`
//!
//! ```rust
//! use crudcriteria::{Criteria, FilterPrimitives, Pagination};
//!
//! let criteria = Criteria::from_primitives(
//!     &[FilterPrimitives::new("userId", "eq", "42")],
//!     Some("createdAt"),
//!     Some("DESC"),
//!     Some(10),
//!     Some(2),
//!     None,
//! )?;
//!
//! assert_eq!(criteria.offset()?, 10);
//! assert_eq!(criteria.pagination(), Pagination::Offset { limit: 10, offset: 10 });
//! # Ok::<(), crudcriteria::CriteriaError>(())
//! ```

pub mod aggregate;
pub mod filter;
pub mod order;
pub mod pagination;

pub use aggregate::Criteria;
pub use filter::{Filter, FilterField, FilterOperator, FilterValue, Filters};
pub use order::{Order, OrderBy, OrderType, OrderTypes};
pub use pagination::Pagination;
