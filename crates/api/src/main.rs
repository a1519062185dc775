use std::net::SocketAddr;
use std::sync::Arc;

use movies_api::bootstrap::{exit_on_error, init_tracing};
use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_db::{DbConfig, PgMovieStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("movies_api=debug,movies_db=debug,tower_http=debug");

    // --- Configuration ---
    let config = exit_on_error(ServerConfig::from_env(), "Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let db_config = exit_on_error(DbConfig::from_env(), "Invalid database configuration");

    // --- Database ---
    let pool = exit_on_error(
        movies_db::connect(&db_config).await,
        "Failed to connect to database",
    );
    tracing::info!("Database connection pool created");

    exit_on_error(
        movies_db::health_check(&pool).await,
        "Database health check failed",
    );
    tracing::info!("Database health check passed");

    if config.run_migrations {
        exit_on_error(
            movies_db::run_migrations(&pool).await,
            "Failed to run database migrations",
        );
        tracing::info!("Database migrations applied");
    } else {
        tracing::info!("Skipping migrations (RUN_MIGRATIONS=false)");
    }

    // --- App state ---
    let addr = SocketAddr::new(
        exit_on_error(config.host.parse(), "Invalid HOST address"),
        config.port,
    );
    let state = AppState {
        store: Arc::new(PgMovieStore::new(pool.clone())),
        config: Arc::new(config),
    };

    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = exit_on_error(
        tokio::net::TcpListener::bind(addr).await,
        "Failed to bind to address",
    );

    exit_on_error(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await,
        "Server error",
    );

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
