//! Server binary: load settings, make sure the database exists, populate it from the
//! fixtures, then serve the API until Ctrl-C or SIGTERM.
//!
//! Run from repo root: `cargo run -p dnd-server`

use dnd_api::{app, ensure_database_exists, init_tracing, populate, AppState, SchemaRegistry, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("dnd_api=info,dnd_server=info,tower_http=info");

    let settings = Settings::from_env()?;
    let registry = SchemaRegistry::builtin()?;

    ensure_database_exists(&settings.connect_options).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options.clone())
        .await?;
    tracing::info!("connected to database");

    let summary = populate(&pool, &registry, &settings.schema, &settings.fixture_dir).await?;
    tracing::info!(
        created = summary.created.len(),
        skipped = summary.skipped.len(),
        "database populated"
    );

    let state = AppState::new(pool.clone(), registry, &settings.schema);
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
