//! Table data routes. The table segment is resolved against the registry by each handler.

use crate::handlers::{list_all, list_names, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn table_routes(state: AppState) -> Router {
    Router::new()
        .route("/all/:table", get(list_all))
        .route("/:table", get(list_names))
        .route("/:table/:name", get(read).post(read))
        .with_state(state)
}
