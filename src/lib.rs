//! 5e SRD reference-data API: fixture loader and read-only REST façade over PostgreSQL.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod naming;
pub mod populate;
pub mod registry;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;

pub use error::{AppError, PopulateError, RegistryError, SettingsError};
pub use logging::init_tracing;
pub use populate::{populate, PopulateSummary};
pub use registry::{SchemaRegistry, TableSpec};
pub use routes::{app, common_routes, table_routes};
pub use settings::Settings;
pub use state::AppState;
pub use store::ensure_database_exists;
pub use service::QueryService;
