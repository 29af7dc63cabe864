//! Table data handlers: names, one row by name, all rows.

use crate::error::AppError;
use crate::registry::TableSpec;
use crate::response::ndjson;
use crate::service::QueryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde_json::Value;

/// Resolve a path segment to a registry table. Anything else is rejected before a query is built.
pub(crate) fn lookup_table<'a>(state: &'a AppState, table: &str) -> Result<&'a TableSpec, AppError> {
    state.registry.get(table).ok_or_else(|| {
        tracing::warn!(table = %table, "unknown table");
        AppError::NotFound(format!("table {}", table))
    })
}

fn require_name_field(spec: &TableSpec) -> Result<(), AppError> {
    if spec.has_field("name") {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("table {} has no name field", spec.name)))
    }
}

/// GET /:table: `{"name": ...}` per row, newline-delimited.
pub async fn list_names(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Response, AppError> {
    let spec = lookup_table(&state, &table)?;
    require_name_field(spec)?;
    tracing::debug!(table = %table, "list names");
    ndjson(QueryService::stream_names(&state.pool, spec, &state.schema)).await
}

/// GET|POST /:table/:name: one row as a JSON object.
pub async fn read(
    State(state): State<AppState>,
    Path((table, name)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let spec = lookup_table(&state, &table)?;
    require_name_field(spec)?;
    tracing::debug!(table = %table, name = %name, "read");
    let row = QueryService::read_by_name(&state.pool, spec, &state.schema, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} in {}", name, table)))?;
    Ok(Json(row))
}

/// GET /all/:table: every row, newline-delimited.
pub async fn list_all(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Response, AppError> {
    let spec = lookup_table(&state, &table)?;
    tracing::debug!(table = %table, "list all");
    ndjson(QueryService::stream_all(&state.pool, spec, &state.schema)).await
}
