//! Database bootstrap and catalog lookups.

use crate::sql::quoted;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::collections::HashSet;

/// Ensure the database named in `opts` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), sqlx::Error> {
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Create the target schema if it does not exist yet. Two processes racing through
/// IF NOT EXISTS can still collide on the catalog index; the loser treats that as success.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    match sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await
    {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation_on(&e, "pg_namespace_nspname_index") => Ok(()),
        Err(e) => Err(e),
    }
}

/// SQLSTATE 23505 raised by the given (catalog) index.
pub(crate) fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    e.as_database_error()
        .map(|db| db.code().as_deref() == Some("23505") && db.constraint() == Some(constraint))
        .unwrap_or(false)
}

/// Names of the tables that already exist in `schema`.
pub async fn list_tables(pool: &PgPool, schema: &str) -> Result<HashSet<String>, sqlx::Error> {
    let names = sqlx::query_scalar::<_, String>("SELECT tablename FROM pg_tables WHERE schemaname = $1")
        .bind(schema)
        .fetch_all(pool)
        .await?;
    Ok(names.into_iter().collect())
}
