//! Common routes: health, readiness, version, and registry introspection.

use crate::handlers::{capabilities, describe_table, tables};
use crate::state::AppState;
use crate::store::list_tables;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

/// Registered tables against those present in the configured schema.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    schema: String,
    registered: usize,
    populated: usize,
    database: &'static str,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 200 once the database answers, 503 otherwise. `populated` counts registry tables found in the schema.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let registered = state.registry.tables().len();
    match list_tables(&state.pool, &state.schema).await {
        Ok(present) => {
            let populated = state
                .registry
                .tables()
                .iter()
                .filter(|t| present.contains(&t.name))
                .count();
            (
                StatusCode::OK,
                Json(Readiness {
                    status: "ok",
                    schema: state.schema.to_string(),
                    registered,
                    populated,
                    database: "ok",
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    schema: state.schema.to_string(),
                    registered,
                    populated: 0,
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn version(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "tables": state.registry.tables().len(),
    }))
}

/// GET /health, /ready, /version, /capabilities, /capabilities/:table, /tables.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/capabilities", get(capabilities))
        .route("/capabilities/:table", get(describe_table))
        .route("/tables", get(tables))
        .with_state(state)
}
