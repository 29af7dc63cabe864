//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Table definitions that break a registry invariant.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("table '{0}' declares no fields")]
    EmptyFields(String),
    #[error("table '{table}' declares field '{field}' more than once")]
    DuplicateField { table: String, field: String },
    #[error("table '{table}': field '{field}' is the stored name of another field")]
    ReservedField { table: String, field: String },
    #[error("duplicate table name: {0}")]
    DuplicateTable(String),
    #[error("invalid {kind} identifier: '{name}'")]
    InvalidIdentifier { kind: &'static str, name: String },
}

/// Failure while loading fixtures into the store. Always fatal for the affected table.
#[derive(Error, Debug)]
pub enum PopulateError {
    #[error("table {table}: cannot read fixture {}: {source}", path.display())]
    FixtureRead {
        table: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("table {table}: malformed fixture {}: {source}", path.display())]
    FixtureParse {
        table: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("table {table}: create table failed: {source}")]
    SchemaCreation {
        table: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("table {table}: record {record} has key '{key}' outside the table schema")]
    SchemaMismatch { table: String, record: usize, key: String },
    #[error("table {table}: insert of record {record} failed: {source}")]
    RowInsert {
        table: String,
        record: usize,
        #[source]
        source: sqlx::Error,
    },
    #[error("store: {0}")]
    Store(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{name}: {message}")]
    Invalid { name: &'static str, message: String },
    #[error("missing database configuration: set DATABASE_URL or DB_ENDPOINT")]
    MissingDatabase,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Populate(#[from] PopulateError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Registry(_) => (StatusCode::INTERNAL_SERVER_ERROR, "registry_error"),
            AppError::Populate(_) => (StatusCode::INTERNAL_SERVER_ERROR, "populate_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = AppError::NotFound("table: dragons".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn row_not_found_maps_to_404_and_other_db_errors_to_500() {
        let res = AppError::Db(sqlx::Error::RowNotFound).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let res = AppError::Db(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn schema_mismatch_message_names_the_key() {
        let err = PopulateError::SchemaMismatch {
            table: "spells".into(),
            record: 3,
            key: "components_extra".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("spells"));
        assert!(msg.contains("components_extra"));
    }
}
