//! Routers, and the full application router served by the binary.

pub mod common;
pub mod table;

pub use common::common_routes;
pub use table::table_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are never read; anything larger than this is refused.
const BODY_LIMIT: usize = 16 * 1024;

/// Every route, served both at the root and under `/api`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(table_routes(state));
    Router::new()
        .nest("/api", api.clone())
        .merge(api)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
