use sea_orm::{
    Condition, Order, QueryFilter, QueryOrder, QuerySelect, Value,
    sea_query::{Alias, ColumnRef, Expr, IntoIden, SimpleExpr},
};

use super::{CriteriaConverter, FieldMapping};
use crate::criteria::{Criteria, Filter, FilterOperator, OrderTypes};
use crate::errors::CriteriaError;
use crate::hydrators::Hydrators;

/// Sea-ORM rendering of a [`Criteria`].
///
/// Holds the pieces separately so a repository can inspect them or apply them
/// to its own query with [`SeaOrmCriteria::apply`].
#[derive(Debug, Clone)]
pub struct SeaOrmCriteria {
    condition: Option<Condition>,
    order: Option<(ColumnRef, Order)>,
    first_result: Option<u64>,
    max_results: Option<u64>,
}

impl SeaOrmCriteria {
    /// Conjunction of every filter and the cursor bound; `None` when there are neither.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    #[must_use]
    pub fn order(&self) -> Option<&(ColumnRef, Order)> {
        self.order.as_ref()
    }

    #[must_use]
    pub fn first_result(&self) -> Option<u64> {
        self.first_result
    }

    #[must_use]
    pub fn max_results(&self) -> Option<u64> {
        self.max_results
    }

    /// Apply condition, ordering and limits to `query`.
    ///
    /// ```rust,ignore
    /// let rows = converter
    ///     .convert(&criteria)?
    ///     .apply(work_entry::Entity::find())
    ///     .all(db)
    ///     .await?;
    /// ```
    #[must_use]
    pub fn apply<Q>(self, query: Q) -> Q
    where
        Q: QueryFilter + QueryOrder + QuerySelect,
    {
        let mut query = query;
        if let Some(condition) = self.condition {
            query = query.filter(condition);
        }
        if let Some((column, direction)) = self.order {
            query = query.order_by(SimpleExpr::Column(column), direction);
        }
        if let Some(first_result) = self.first_result {
            query = query.offset(first_result);
        }
        if let Some(max_results) = self.max_results {
            query = query.limit(max_results);
        }
        query
    }
}

/// Renders a [`Criteria`] as a [`SeaOrmCriteria`].
///
/// Filter values and the cursor go through [`Hydrators`] keyed by the logical
/// field name, then through the [`FieldMapping`] for the column reference.
#[derive(Debug, Clone, Default)]
pub struct SeaOrmCriteriaConverter {
    field_mapping: FieldMapping,
    hydrators: Hydrators,
}

impl SeaOrmCriteriaConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field_mapping(mut self, field_mapping: FieldMapping) -> Self {
        self.field_mapping = field_mapping;
        self
    }

    #[must_use]
    pub fn with_hydrators(mut self, hydrators: Hydrators) -> Self {
        self.hydrators = hydrators;
        self
    }

    fn column(&self, logical: &str) -> ColumnRef {
        let physical = self.field_mapping.resolve(logical);
        match physical.rsplit_once('.') {
            Some((table, column)) => {
                ColumnRef::TableColumn(Alias::new(table).into_iden(), Alias::new(column).into_iden())
            }
            None => ColumnRef::Column(Alias::new(physical).into_iden()),
        }
    }

    fn filter_expression(&self, filter: &Filter) -> Result<Condition, CriteriaError> {
        let logical = filter.field().value();
        let column = Expr::col(self.column(logical));
        let value = self.hydrators.hydrate(logical, filter.value().value())?;

        let expression = match filter.operator() {
            FilterOperator::Equal => column.eq(value),
            FilterOperator::NotEqual => column.ne(value),
            FilterOperator::Gt => column.gt(value),
            FilterOperator::Gte => column.gte(value),
            FilterOperator::Lt => column.lt(value),
            FilterOperator::Lte => column.lte(value),
            FilterOperator::Contains => {
                column.like(format!("%{}%", pattern_text(filter, &value)?))
            }
            FilterOperator::NotContains => {
                let contains = column.like(format!("%{}%", pattern_text(filter, &value)?));
                return Ok(Condition::all().add(contains).not());
            }
            FilterOperator::StartsWith => {
                column.like(format!("{}%", pattern_text(filter, &value)?))
            }
        };

        Ok(Condition::all().add(expression))
    }

    fn cursor_expression(&self, criteria: &Criteria) -> Result<SimpleExpr, CriteriaError> {
        let order = criteria.order();
        let logical = order.order_by().value();
        let column = Expr::col(self.column(logical));
        let cursor = self.hydrators.hydrate(logical, criteria.cursor())?;

        Ok(if order.order_type().order_types() == OrderTypes::Asc {
            column.gt(cursor)
        } else {
            column.lt(cursor)
        })
    }
}

/// Pattern operators only apply to text; a hydrator that produced any other
/// type leaves the expression builder without an equivalent.
fn pattern_text(filter: &Filter, value: &Value) -> Result<String, CriteriaError> {
    match value {
        Value::String(Some(text)) => Ok(text.to_string()),
        _ => Err(CriteriaError::UnsupportedFilterOperator {
            field: filter.field().value().to_string(),
            operator: filter.operator(),
        }),
    }
}

impl CriteriaConverter for SeaOrmCriteriaConverter {
    type Output = SeaOrmCriteria;

    /// # Errors
    ///
    /// [`CriteriaError::Hydration`] when a filter value or the cursor is
    /// rejected by its hydrator; [`CriteriaError::UnsupportedFilterOperator`]
    /// when a pattern operator meets a non-text hydrated value.
    fn convert(&self, criteria: &Criteria) -> Result<SeaOrmCriteria, CriteriaError> {
        let mut condition = Condition::all();
        let mut has_condition = false;

        for filter in criteria.filters() {
            condition = condition.add(self.filter_expression(filter)?);
            has_condition = true;
        }

        if criteria.has_cursor() && criteria.has_order() {
            condition = condition.add(self.cursor_expression(criteria)?);
            has_condition = true;
        }

        let order = match criteria.order().order_type().order_types() {
            OrderTypes::Asc => Some(Order::Asc),
            OrderTypes::Desc => Some(Order::Desc),
            OrderTypes::None => None,
        }
        .map(|direction| (self.column(criteria.order().order_by().value()), direction));

        let pagination = criteria.pagination();

        tracing::debug!(
            filters = criteria.filters().len(),
            cursor = criteria.has_cursor(),
            pagination = pagination.name(),
            "Converted criteria to Sea-ORM query"
        );

        Ok(SeaOrmCriteria {
            condition: has_condition.then_some(condition),
            order,
            first_result: pagination.offset(),
            max_results: pagination.limit(),
        })
    }
}
