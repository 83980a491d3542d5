use super::{Filter, Filters, Order, Pagination};
use crate::errors::CriteriaError;
use crate::primitives::{CriteriaPrimitives, FilterPrimitives};

const PAGE_NUMBER_WITHOUT_PAGE_SIZE: &str = "Page number cannot be set without page size";
const CURSOR_WITHOUT_PAGE_SIZE: &str = "Cursor cannot be set without page size";

/// Filters, order and pagination for one list query.
///
/// Never mutated after construction; [`Criteria::with_filter`] returns a new
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    filters: Filters,
    order: Order,
    page_size: Option<u64>,
    page_number: Option<u64>,
    cursor: Option<String>,
}

impl Criteria {
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidPaginationConfiguration`] when a page
    /// number or a cursor is given without a page size.
    pub fn create(
        filters: Filters,
        order: Order,
        page_size: Option<u64>,
        page_number: Option<u64>,
        cursor: Option<String>,
    ) -> Result<Self, CriteriaError> {
        let criteria = Self {
            filters,
            order,
            page_size,
            page_number,
            cursor,
        };
        criteria.ensure_page_size_with_page_number()?;
        criteria.ensure_page_size_with_cursor()?;
        Ok(criteria)
    }

    /// Criteria without any pagination; cannot fail.
    #[must_use]
    pub fn unpaginated(filters: Filters, order: Order) -> Self {
        Self {
            filters,
            order,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Propagates filter and order parsing errors, then the pagination
    /// invariants of [`Criteria::create`].
    pub fn from_primitives(
        filters: &[FilterPrimitives],
        order_by: Option<&str>,
        order_type: Option<&str>,
        page_size: Option<u64>,
        page_number: Option<u64>,
        cursor: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        Self::create(
            Filters::from_primitives(filters)?,
            Order::from_primitives(order_by, order_type)?,
            page_size,
            page_number,
            cursor.map(str::to_string),
        )
    }

    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    #[must_use]
    pub fn page_number(&self) -> Option<u64> {
        self.page_number
    }

    /// Cursor value, empty when none was given.
    #[must_use]
    pub fn cursor(&self) -> &str {
        self.cursor.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.filters.has_filters()
    }

    #[must_use]
    pub fn has_order(&self) -> bool {
        !self.order.is_none()
    }

    #[must_use]
    pub fn has_cursor(&self) -> bool {
        self.cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }

    /// True when a cursor (possibly empty) and a page size are both present.
    #[must_use]
    pub fn has_cursor_and_page_size(&self) -> bool {
        self.cursor.is_some() && self.page_size.is_some()
    }

    #[must_use]
    pub fn has_pagination(&self) -> bool {
        self.page_size.is_some() && self.page_number.is_some()
    }

    /// `(page_number - 1) * page_size`. Page number `0` is treated as `1`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvalidPaginationConfiguration`] unless both a
    /// page number and a page size are set.
    pub fn offset(&self) -> Result<u64, CriteriaError> {
        self.ensure_page_size_with_page_number()?;
        match (self.page_number, self.page_size) {
            (Some(page_number), Some(page_size)) => {
                Ok(page_number.saturating_sub(1).saturating_mul(page_size))
            }
            _ => Err(CriteriaError::InvalidPaginationConfiguration(
                "Offset requires both page number and page size",
            )),
        }
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        match (self.page_size, self.page_number) {
            (Some(limit), Some(page_number)) => Pagination::Offset {
                limit,
                offset: page_number.saturating_sub(1).saturating_mul(limit),
            },
            (Some(limit), None) if self.cursor.is_some() => Pagination::Cursor { limit },
            _ => Pagination::Unpaginated,
        }
    }

    /// Copy of this criteria with `filter` appended.
    #[must_use]
    pub fn with_filter(&self, filter: Filter) -> Self {
        Self {
            filters: self.filters.with(filter),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn to_primitives(&self) -> CriteriaPrimitives {
        let (order_by, order_type) = if self.order.order_by().is_empty() {
            (None, None)
        } else if self.order.is_none() {
            (Some(self.order.order_by().value().to_string()), None)
        } else {
            (
                Some(self.order.order_by().value().to_string()),
                Some(self.order.order_type().value().to_string()),
            )
        };

        CriteriaPrimitives {
            filters: self.filters.iter().map(Filter::to_primitives).collect(),
            order_by,
            order_type,
            page_size: self.page_size,
            page_number: self.page_number,
            cursor: self.cursor.clone(),
        }
    }

    fn ensure_page_size_with_page_number(&self) -> Result<(), CriteriaError> {
        if self.page_number.is_some() && self.page_size.is_none() {
            return Err(CriteriaError::InvalidPaginationConfiguration(
                PAGE_NUMBER_WITHOUT_PAGE_SIZE,
            ));
        }
        Ok(())
    }

    fn ensure_page_size_with_cursor(&self) -> Result<(), CriteriaError> {
        if self.cursor.is_some() && self.page_size.is_none() {
            return Err(CriteriaError::InvalidPaginationConfiguration(
                CURSOR_WITHOUT_PAGE_SIZE,
            ));
        }
        Ok(())
    }
}

impl TryFrom<CriteriaPrimitives> for Criteria {
    type Error = CriteriaError;

    fn try_from(primitives: CriteriaPrimitives) -> Result<Self, Self::Error> {
        Self::from_primitives(
            &primitives.filters,
            primitives.order_by.as_deref(),
            primitives.order_type.as_deref(),
            primitives.page_size,
            primitives.page_number,
            primitives.cursor.as_deref(),
        )
    }
}
