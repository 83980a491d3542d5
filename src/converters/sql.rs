use sea_orm::{DatabaseBackend, Statement, Value};

use super::{CriteriaConverter, FieldMapping};
use crate::criteria::{Criteria, Filter, FilterOperator, OrderTypes, Pagination};
use crate::errors::CriteriaError;

/// Renders a [`Criteria`] as `SELECT ... FROM ...` SQL text.
///
/// Values are never interpolated: each one becomes a placeholder (`?`, or
/// `$n` for Postgres) with the value in the statement's bound list. Field
/// names and the table name are emitted verbatim and must come from trusted
/// configuration.
///
/// ```rust
/// use crudcriteria::{Criteria, FieldMapping, FilterPrimitives, SqlCriteriaConverter};
/// use crudcriteria::converters::CriteriaConverter;
///
/// let criteria = Criteria::from_primitives(
///     &[FilterPrimitives::new("name", "eq", "value")],
///     None, None, None, None, None,
/// )?;
/// let statement = SqlCriteriaConverter::new(["name", "surname"], "table").convert(&criteria)?;
///
/// assert_eq!(statement.sql, "SELECT name, surname FROM table WHERE name = ?");
/// assert_eq!(statement.to_string(), "SELECT name, surname FROM table WHERE name = 'value'");
/// # Ok::<(), crudcriteria::CriteriaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SqlCriteriaConverter {
    select_fields: Vec<String>,
    table: String,
    field_mapping: FieldMapping,
    backend: DatabaseBackend,
}

impl SqlCriteriaConverter {
    #[must_use]
    pub fn new<I, S>(select_fields: I, table: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            select_fields: select_fields.into_iter().map(Into::into).collect(),
            table: table.into(),
            field_mapping: FieldMapping::default(),
            backend: DatabaseBackend::Sqlite,
        }
    }

    #[must_use]
    pub fn with_field_mapping(mut self, field_mapping: FieldMapping) -> Self {
        self.field_mapping = field_mapping;
        self
    }

    /// Selects the placeholder style and the dialect used when the statement
    /// is displayed with inlined values.
    #[must_use]
    pub fn with_backend(mut self, backend: DatabaseBackend) -> Self {
        self.backend = backend;
        self
    }

    fn filter_clause(&self, filter: &Filter, sql: &mut SqlBuilder) -> String {
        let field = self.field_mapping.resolve(filter.field().value());
        let value = filter.value().value();

        match filter.operator() {
            FilterOperator::Contains => {
                let placeholder = sql.bind(format!("%{value}%"));
                format!("{field} LIKE {placeholder}")
            }
            FilterOperator::StartsWith => {
                let placeholder = sql.bind(format!("{value}%"));
                format!("{field} LIKE {placeholder}")
            }
            // NOT_CONTAINS is bound without wildcards
            operator => {
                let placeholder = sql.bind(value.to_string());
                format!("{field} {} {placeholder}", operator.operator_sql())
            }
        }
    }
}

impl CriteriaConverter for SqlCriteriaConverter {
    type Output = Statement;

    /// Never fails; the `Result` only satisfies the trait.
    fn convert(&self, criteria: &Criteria) -> Result<Statement, CriteriaError> {
        let mut sql = SqlBuilder::new(self.backend);
        sql.push(&format!(
            "SELECT {} FROM {}",
            self.select_fields.join(", "),
            self.table
        ));

        let mut conditions: Vec<String> = criteria
            .filters()
            .iter()
            .map(|filter| self.filter_clause(filter, &mut sql))
            .collect();

        // Any named order field bounds the cursor, directed or not
        if criteria.has_cursor() && !criteria.order().order_by().is_empty() {
            let order = criteria.order();
            let field = self.field_mapping.resolve(order.order_by().value());
            let comparison = if order.order_type().order_types() == OrderTypes::Asc {
                ">"
            } else {
                "<"
            };
            let placeholder = sql.bind(criteria.cursor().to_string());
            conditions.push(format!("{field} {comparison} {placeholder}"));
        }

        if !conditions.is_empty() {
            sql.push(" WHERE ");
            sql.push(&conditions.join(" AND "));
        }

        if criteria.has_order() {
            let order = criteria.order();
            sql.push(&format!(
                " ORDER BY {} {}",
                self.field_mapping.resolve(order.order_by().value()),
                order.order_type().value()
            ));
        }

        let pagination = criteria.pagination();
        match pagination {
            Pagination::Offset { limit, offset } => {
                sql.push(&format!(" LIMIT {limit} OFFSET {offset}"));
            }
            Pagination::Cursor { limit } => sql.push(&format!(" LIMIT {limit}")),
            Pagination::Unpaginated => {}
        }

        tracing::debug!(
            table = %self.table,
            filters = criteria.filters().len(),
            pagination = pagination.name(),
            "Converted criteria to SQL"
        );

        Ok(sql.build())
    }
}

/// SQL text plus the values bound so far.
struct SqlBuilder {
    backend: DatabaseBackend,
    sql: String,
    values: Vec<Value>,
}

impl SqlBuilder {
    fn new(backend: DatabaseBackend) -> Self {
        Self {
            backend,
            sql: String::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }

    /// Bind `value` and return its placeholder.
    fn bind(&mut self, value: String) -> String {
        self.values.push(Value::from(value));
        match self.backend {
            DatabaseBackend::Postgres => format!("${}", self.values.len()),
            _ => "?".to_string(),
        }
    }

    fn build(self) -> Statement {
        Statement::from_sql_and_values(self.backend, self.sql, self.values)
    }
}
