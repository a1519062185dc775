//! Persistence gateway for the movies service.
//!
//! Owns the connection pool, schema migrations, the `movies` model and the
//! [`MovieStore`] seam handlers talk to.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use memory::MemoryMovieStore;
pub use store::{MovieStore, PgMovieStore};

pub type DbPool = sqlx::PgPool;

/// Open a connection pool using discrete connection parameters or a URL.
pub async fn connect(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;
    tracing::debug!(?config, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations. Already-applied migrations are skipped, so this
/// is safe to call on every boot.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
