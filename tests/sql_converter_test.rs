use crudcriteria::converters::CriteriaConverter;
use crudcriteria::{Criteria, FieldMapping, FilterPrimitives, SqlCriteriaConverter};
use sea_orm::{ConnectionTrait, DatabaseBackend, Value};

mod common;
use common::{seed_work_entries, setup_test_db, work_entry_mapping};

fn converter() -> SqlCriteriaConverter {
    SqlCriteriaConverter::new(["name", "surname"], "table")
}

fn created_at_mapping() -> FieldMapping {
    FieldMapping::new().with("createdAt", "created_at")
}

fn bound(statement: &sea_orm::Statement) -> Vec<Value> {
    statement
        .values
        .as_ref()
        .map(|values| values.0.clone())
        .unwrap_or_default()
}

#[test]
fn test_no_filters() {
    let statement = converter().convert(&Criteria::default()).unwrap();

    assert_eq!(statement.sql, "SELECT name, surname FROM table");
    assert!(bound(&statement).is_empty());
}

#[test]
fn test_one_equality_filter() {
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("name", "eq", "value")],
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();
    let statement = converter().convert(&criteria).unwrap();

    assert_eq!(statement.sql, "SELECT name, surname FROM table WHERE name = ?");
    assert_eq!(
        statement.to_string(),
        "SELECT name, surname FROM table WHERE name = 'value'"
    );
}

#[test]
fn test_two_filters_keep_collection_order() {
    let criteria = Criteria::from_primitives(
        &[
            FilterPrimitives::new("name", "eq", "value"),
            FilterPrimitives::new("surname", "eq", "value"),
        ],
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();

    assert_eq!(
        converter().convert(&criteria).unwrap().to_string(),
        "SELECT name, surname FROM table WHERE name = 'value' AND surname = 'value'"
    );
}

#[test]
fn test_sorted_without_filters() {
    let criteria =
        Criteria::from_primitives(&[], Some("name"), Some("ASC"), None, None, None).unwrap();

    assert_eq!(
        converter().convert(&criteria).unwrap().to_string(),
        "SELECT name, surname FROM table ORDER BY name ASC"
    );
}

#[test]
fn test_filters_and_contains_with_order() {
    let criteria = Criteria::from_primitives(
        &[
            FilterPrimitives::new("name", "eq", "value"),
            FilterPrimitives::new("surname", "CONTAINS", "value"),
        ],
        Some("name"),
        Some("ASC"),
        None,
        None,
        None,
    )
    .unwrap();
    let statement = converter().convert(&criteria).unwrap();

    assert_eq!(
        statement.sql,
        "SELECT name, surname FROM table WHERE name = ? AND surname LIKE ? ORDER BY name ASC"
    );
    assert_eq!(
        statement.to_string(),
        "SELECT name, surname FROM table WHERE name = 'value' AND surname LIKE '%value%' ORDER BY name ASC"
    );
}

#[test]
fn test_offset_pagination() {
    let criteria =
        Criteria::from_primitives(&[], Some("name"), Some("DESC"), Some(10), Some(2), None)
            .unwrap();

    assert_eq!(criteria.offset().unwrap(), 10);
    assert_eq!(
        converter().convert(&criteria).unwrap().to_string(),
        "SELECT name, surname FROM table ORDER BY name DESC LIMIT 10 OFFSET 10"
    );
}

#[test]
fn test_cursor_ascending() {
    let criteria = Criteria::from_primitives(
        &[],
        Some("createdAt"),
        Some("ASC"),
        Some(2),
        None,
        Some("2021-01-01 00:00:00"),
    )
    .unwrap();
    let statement = SqlCriteriaConverter::new(["id", "name"], "table")
        .with_field_mapping(created_at_mapping())
        .convert(&criteria)
        .unwrap();

    assert_eq!(
        statement.sql,
        "SELECT id, name FROM table WHERE created_at > ? ORDER BY created_at ASC LIMIT 2"
    );
    assert_eq!(
        statement.to_string(),
        "SELECT id, name FROM table WHERE created_at > '2021-01-01 00:00:00' ORDER BY created_at ASC LIMIT 2"
    );
}

#[test]
fn test_cursor_descending_after_filters() {
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("father", "eq", "Darth Vader")],
        Some("createdAt"),
        Some("DESC"),
        Some(2),
        None,
        Some("2021-01-01 00:00:00"),
    )
    .unwrap();
    let statement = SqlCriteriaConverter::new(["id", "name"], "sons")
        .with_field_mapping(created_at_mapping())
        .convert(&criteria)
        .unwrap();

    assert_eq!(
        statement.to_string(),
        "SELECT id, name FROM sons WHERE father = 'Darth Vader' AND created_at < '2021-01-01 00:00:00' ORDER BY created_at DESC LIMIT 2"
    );
}

#[test]
fn test_page_number_and_cursor_render_a_single_limit() {
    let criteria = Criteria::from_primitives(
        &[],
        Some("createdAt"),
        Some("ASC"),
        Some(10),
        Some(2),
        Some("2021-01-01 00:00:00"),
    )
    .unwrap();
    let statement = SqlCriteriaConverter::new(["id", "name"], "table")
        .with_field_mapping(created_at_mapping())
        .convert(&criteria)
        .unwrap();

    assert_eq!(
        statement.to_string(),
        "SELECT id, name FROM table WHERE created_at > '2021-01-01 00:00:00' ORDER BY created_at ASC LIMIT 10 OFFSET 10"
    );
    assert_eq!(statement.sql.matches("LIMIT").count(), 1);
}

#[test]
fn test_values_are_bound_not_interpolated() {
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("name", "eq", "x' OR '1'='1")],
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();
    let statement = converter().convert(&criteria).unwrap();

    assert_eq!(statement.sql, "SELECT name, surname FROM table WHERE name = ?");
    assert_eq!(
        bound(&statement),
        vec![Value::from("x' OR '1'='1".to_string())]
    );
}

#[test]
fn test_conversion_is_idempotent() {
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("surname", "STARTS_WITH", "Sky")],
        Some("createdAt"),
        Some("ASC"),
        Some(5),
        None,
        Some("2021-01-01 00:00:00"),
    )
    .unwrap();
    let converter = converter().with_field_mapping(created_at_mapping());

    let first = converter.convert(&criteria).unwrap();
    let second = converter.convert(&criteria).unwrap();

    assert_eq!(first.sql, second.sql);
    assert_eq!(bound(&first), bound(&second));
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_postgres_backend_renders_numbered_placeholders() {
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("name", "eq", "value")],
        Some("createdAt"),
        Some("ASC"),
        Some(2),
        None,
        Some("2021-01-01 00:00:00"),
    )
    .unwrap();
    let statement = converter()
        .with_field_mapping(created_at_mapping())
        .with_backend(DatabaseBackend::Postgres)
        .convert(&criteria)
        .unwrap();

    assert_eq!(
        statement.sql,
        "SELECT name, surname FROM table WHERE name = $1 AND created_at > $2 ORDER BY created_at ASC LIMIT 2"
    );
}

#[tokio::test]
async fn test_cursor_pages_against_sqlite() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_work_entries(&db, 6).await.expect("Failed to seed work entries");

    let converter =
        SqlCriteriaConverter::new(["name"], "work_entries").with_field_mapping(work_entry_mapping());
    let criteria = Criteria::from_primitives(
        &[],
        Some("createdAt"),
        Some("ASC"),
        Some(2),
        None,
        Some("2021-01-02 00:00:00"),
    )
    .unwrap();

    let rows = db
        .query_all(converter.convert(&criteria).unwrap())
        .await
        .expect("Query failed");
    let names: Vec<String> = rows
        .iter()
        .map(|row| row.try_get("", "name").unwrap())
        .collect();

    assert_eq!(names, vec!["Entry 03", "Entry 04"]);
}

#[tokio::test]
async fn test_offset_pages_against_sqlite() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    seed_work_entries(&db, 5).await.expect("Failed to seed work entries");

    let converter =
        SqlCriteriaConverter::new(["name"], "work_entries").with_field_mapping(work_entry_mapping());
    let criteria = Criteria::from_primitives(
        &[FilterPrimitives::new("name", "STARTS_WITH", "Entry")],
        Some("createdAt"),
        Some("DESC"),
        Some(2),
        Some(2),
        None,
    )
    .unwrap();

    let rows = db
        .query_all(converter.convert(&criteria).unwrap())
        .await
        .expect("Query failed");
    let names: Vec<String> = rows
        .iter()
        .map(|row| row.try_get("", "name").unwrap())
        .collect();

    assert_eq!(names, vec!["Entry 03", "Entry 02"]);
}
