//! Shared application state for all routes.

use crate::registry::SchemaRegistry;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Only tables named here are ever queried.
    pub registry: Arc<SchemaRegistry>,
    /// Schema holding the populated tables.
    pub schema: Arc<str>,
}

impl AppState {
    pub fn new(pool: PgPool, registry: SchemaRegistry, schema: &str) -> Self {
        AppState {
            pool,
            registry: Arc::new(registry),
            schema: Arc::from(schema),
        }
    }
}
