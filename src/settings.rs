//! Process settings read from the environment (a `.env` file is honoured by the binary).

use crate::error::SettingsError;
use crate::registry::validator::is_identifier;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE: &str = "5e";

#[derive(Clone)]
pub struct Settings {
    pub connect_options: PgConnectOptions,
    /// Schema holding the reference-data tables.
    pub schema: String,
    /// Directory containing the fixture files named by the registry.
    pub fixture_dir: PathBuf,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connect_options = connect_options(&get)?;
        let schema = get("DB_SCHEMA").unwrap_or_else(|| "public".into());
        if !is_identifier(&schema) {
            return Err(SettingsError::Invalid {
                name: "DB_SCHEMA",
                message: format!("'{}' is not a lowercase identifier", schema),
            });
        }
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|e| SettingsError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                message: format!("{}", e),
            })?,
            None => 5,
        };
        Ok(Settings {
            connect_options,
            schema,
            fixture_dir: get("FIXTURE_DIR").unwrap_or_else(|| "5e_data".into()).into(),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".into()),
            max_connections,
        })
    }
}

// Connection options carry the password, so they are left out.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("schema", &self.schema)
            .field("fixture_dir", &self.fixture_dir)
            .field("bind_addr", &self.bind_addr)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

/// `DATABASE_URL` wins; otherwise the connection is assembled from the discrete `DB_*`
/// variables (credentials injected from a secret store), with TLS required.
fn connect_options<F>(get: &F) -> Result<PgConnectOptions, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("DATABASE_URL") {
        return PgConnectOptions::from_str(&url).map_err(|e| SettingsError::Invalid {
            name: "DATABASE_URL",
            message: e.to_string(),
        });
    }
    let host = get("DB_ENDPOINT").ok_or(SettingsError::MissingDatabase)?;
    let port = match get("DB_PORT") {
        Some(p) => p.parse::<u16>().map_err(|e| SettingsError::Invalid {
            name: "DB_PORT",
            message: e.to_string(),
        })?,
        None => 5432,
    };
    let mut opts = PgConnectOptions::new()
        .host(&host)
        .port(port)
        .database(&get("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.into()))
        .ssl_mode(PgSslMode::Require);
    if let Some(user) = get("DB_USERNAME") {
        opts = opts.username(&user);
    }
    if let Some(password) = get("DB_PASSWORD") {
        opts = opts.password(&password);
    }
    Ok(opts)
}
