use chrono::{NaiveDate, NaiveDateTime};
use crudcriteria::{FieldMapping, Hydrators, hydrators};
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

pub mod work_entry;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    init_tracing();
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Converter debug events show up with `RUST_LOG=crudcriteria=debug`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Logical names used by callers mapped to the `work_entries` columns.
pub fn work_entry_mapping() -> FieldMapping {
    FieldMapping::new()
        .with("id", "id")
        .with("userId", "user_id")
        .with("name", "name")
        .with("createdAt", "created_at")
}

pub fn work_entry_hydrators() -> Hydrators {
    Hydrators::new()
        .with("id", hydrators::uuid)
        .with("userId", hydrators::uuid)
        .with("createdAt", hydrators::naive_datetime)
}

pub fn day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Inserts one entry per day of January 2021, from day 1 to `count`, all
/// owned by the returned user.
pub async fn seed_work_entries(db: &DatabaseConnection, count: u32) -> Result<Uuid, DbErr> {
    let user_id = Uuid::new_v4();
    for n in 1..=count {
        work_entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(format!("Entry {n:02}")),
            created_at: ActiveValue::Set(day(n)),
        }
        .insert(db)
        .await?;
    }
    Ok(user_id)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateWorkEntryTable)]
    }
}

pub struct CreateWorkEntryTable;

#[async_trait::async_trait]
impl MigrationName for CreateWorkEntryTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_work_entry_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateWorkEntryTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(WorkEntryTable)
            .if_not_exists()
            .col(
                ColumnDef::new(WorkEntryColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(WorkEntryColumn::UserId).uuid().not_null())
            .col(ColumnDef::new(WorkEntryColumn::Name).text().not_null())
            .col(
                ColumnDef::new(WorkEntryColumn::CreatedAt)
                    .date_time()
                    .not_null(),
            )
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkEntryTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum WorkEntryColumn {
    Id,
    UserId,
    Name,
    CreatedAt,
}

impl Iden for WorkEntryColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::UserId => "user_id",
                Self::Name => "name",
                Self::CreatedAt => "created_at",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct WorkEntryTable;

impl Iden for WorkEntryTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "work_entries").unwrap();
    }
}
