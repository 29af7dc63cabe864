//! Introspection handlers: capabilities, table list, table description.

use crate::error::AppError;
use crate::handlers::table::lookup_table;
use crate::registry::TableSpec;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ApiCapability {
    pub path: &'static str,
    pub methods: &'static [&'static str],
    pub description: &'static str,
}

pub const CAPABILITIES: &[ApiCapability] = &[
    ApiCapability {
        path: "/{table}/{name}",
        methods: &["GET", "POST"],
        description: "Returns the record of a table whose name matches.",
    },
    ApiCapability {
        path: "/{table}",
        methods: &["GET"],
        description: "Returns the names of all records in a table, one JSON object per line.",
    },
    ApiCapability {
        path: "/all/{table}",
        methods: &["GET"],
        description: "Returns every record in a table, one JSON object per line.",
    },
    ApiCapability {
        path: "/capabilities",
        methods: &["GET"],
        description: "Returns the available endpoints with their methods and descriptions.",
    },
    ApiCapability {
        path: "/capabilities/{table}",
        methods: &["GET"],
        description: "Returns the fields of a table.",
    },
    ApiCapability {
        path: "/tables",
        methods: &["GET"],
        description: "Returns the names of all tables.",
    },
    ApiCapability {
        path: "/health",
        methods: &["GET"],
        description: "Liveness check.",
    },
    ApiCapability {
        path: "/ready",
        methods: &["GET"],
        description: "Readiness check: database reachable, registered and populated table counts.",
    },
    ApiCapability {
        path: "/version",
        methods: &["GET"],
        description: "Package name, version and number of registered tables.",
    },
];

pub async fn capabilities() -> Json<&'static [ApiCapability]> {
    Json(CAPABILITIES)
}

pub async fn tables(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.names().into_iter().map(String::from).collect())
}

pub async fn describe_table(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Json<TableSpec>, AppError> {
    let spec = lookup_table(&state, &table)?;
    Ok(Json(spec.clone()))
}
