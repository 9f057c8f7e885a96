use std::net::SocketAddr;

use sea_orm::{Database, DatabaseConnection};
use tokio::signal;

use crate::app::state::AppState;
use crate::config::AppConfig;

/// Brings the server up: persistence client, application state, router,
/// listener. Runs until a shutdown signal arrives, then releases the
/// database connection.
pub async fn init_server(config: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&config).await?;

    let state = AppState::new(&config, db.clone());

    // Build the router with all cross-cutting layers applied
    let app = crate::app::build_app(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.close().await?;
        tracing::info!("database connection closed");
    }

    Ok(())
}

async fn connect_database(config: &AppConfig) -> anyhow::Result<Option<DatabaseConnection>> {
    let Some(url) = &config.database_url else {
        tracing::warn!("`DATABASE_URL` not set, starting without a database connection");
        return Ok(None);
    };

    let db = Database::connect(url.as_str()).await?;
    tracing::info!("database connection established");

    Ok(Some(db))
}

async fn shutdown_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("cannot install SIGTERM handler {:?}", err);
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

    tracing::info!("shutdown signal received, draining connections");
}
