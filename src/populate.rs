//! One-time load of the JSON fixtures into PostgreSQL.
//!
//! Tables that already exist in the target schema are treated as populated and never
//! touched again. A missing table is created and filled inside one transaction, so a
//! failure part-way through leaves no half-loaded table behind.

use crate::error::PopulateError;
use crate::registry::{SchemaRegistry, TableSpec};
use crate::sql::{create_table, insert, row_values};
use crate::store::{ensure_schema, is_unique_violation_on, list_tables};
use serde_json::{Map, Value};
use sqlx::PgPool;
use std::path::Path;

pub type Record = Map<String, Value>;

/// What a populate pass did, per table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Tables created by this pass with the number of rows inserted.
    pub created: Vec<(String, usize)>,
    /// Tables that were already present (or created concurrently by another process).
    pub skipped: Vec<String>,
}

/// Create and fill every registry table missing from `schema`, in registry order.
/// Stops at the first error; tables committed before it stay committed.
pub async fn populate(
    pool: &PgPool,
    registry: &SchemaRegistry,
    schema: &str,
    fixture_dir: &Path,
) -> Result<PopulateSummary, PopulateError> {
    tracing::info!(schema = %schema, fixtures = %fixture_dir.display(), "populating database");
    ensure_schema(pool, schema).await?;
    let existing = list_tables(pool, schema).await?;

    let mut summary = PopulateSummary::default();
    for spec in registry.tables() {
        if existing.contains(&spec.name) {
            tracing::debug!(table = %spec.name, "table already populated");
            summary.skipped.push(spec.name.clone());
            continue;
        }

        let records = read_fixture(spec, fixture_dir).await?;
        for (i, rec) in records.iter().enumerate() {
            validate_record(spec, i, rec)?;
        }

        match load_table(pool, spec, schema, &records).await? {
            Some(rows) => {
                tracing::info!(table = %spec.name, rows, "created table");
                summary.created.push((spec.name.clone(), rows));
            }
            None => {
                tracing::warn!(table = %spec.name, "table created concurrently, skipping");
                summary.skipped.push(spec.name.clone());
            }
        }
    }
    Ok(summary)
}

/// Read and parse the fixture for one table: a JSON array of objects.
pub async fn read_fixture(spec: &TableSpec, fixture_dir: &Path) -> Result<Vec<Record>, PopulateError> {
    let path = fixture_dir.join(&spec.source_file);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| PopulateError::FixtureRead {
            table: spec.name.clone(),
            path: path.clone(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| PopulateError::FixtureParse {
        table: spec.name.clone(),
        path,
        source,
    })
}

/// Every key of the record must be one of the table's fields. An unknown key means the
/// fixture and the registry have drifted apart, which is fatal.
pub fn validate_record(spec: &TableSpec, index: usize, record: &Record) -> Result<(), PopulateError> {
    match record.keys().find(|k| !spec.has_field(k)) {
        Some(key) => Err(PopulateError::SchemaMismatch {
            table: spec.name.clone(),
            record: index,
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

/// CREATE TABLE plus one INSERT per record in a single transaction.
/// Returns `None` when another process created the table first.
async fn load_table(
    pool: &PgPool,
    spec: &TableSpec,
    schema: &str,
    records: &[Record],
) -> Result<Option<usize>, PopulateError> {
    let mut tx = pool.begin().await?;

    let ddl = create_table(spec, schema);
    tracing::debug!(sql = %ddl, "create table");
    if let Err(e) = sqlx::query(&ddl).execute(&mut *tx).await {
        if is_duplicate_table(&e) {
            tx.rollback().await?;
            return Ok(None);
        }
        return Err(PopulateError::SchemaCreation {
            table: spec.name.clone(),
            source: e,
        });
    }

    let sql = insert(spec, schema);
    tracing::debug!(sql = %sql, rows = records.len(), "insert");
    for (i, rec) in records.iter().enumerate() {
        let mut query = sqlx::query(&sql);
        for value in row_values(spec, rec) {
            query = query.bind(value);
        }
        query
            .execute(&mut *tx)
            .await
            .map_err(|source| PopulateError::RowInsert {
                table: spec.name.clone(),
                record: i,
                source,
            })?;
    }

    tx.commit().await?;
    Ok(Some(records.len()))
}

/// A racing CREATE TABLE surfaces either as duplicate_table or, when both transactions
/// were in flight, as a unique violation on the pg_type catalog index.
fn is_duplicate_table(e: &sqlx::Error) -> bool {
    let duplicate = e
        .as_database_error()
        .map(|db| db.code().as_deref() == Some("42P07"))
        .unwrap_or(false);
    duplicate || is_unique_violation_on(e, "pg_type_typname_nsp_index")
}
