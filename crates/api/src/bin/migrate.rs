//! One-shot schema setup: connect, apply migrations, exit.
//!
//! Run once per deployment, then start servers with `RUN_MIGRATIONS=false`
//! so concurrently booting instances do not race on the schema.

use movies_api::bootstrap::{exit_on_error, init_tracing};
use movies_db::DbConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("movies_migrate=info,movies_db=info,sqlx=warn");

    let db_config = exit_on_error(DbConfig::from_env(), "Invalid database configuration");
    let pool = exit_on_error(
        movies_db::connect(&db_config).await,
        "Failed to connect to database",
    );

    exit_on_error(
        movies_db::run_migrations(&pool).await,
        "Failed to run database migrations",
    );
    tracing::info!("Database migrations applied");

    pool.close().await;
}
