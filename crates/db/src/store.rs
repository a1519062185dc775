//! Injectable persistence seam used by the HTTP layer.

use async_trait::async_trait;
use movies_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// Storage operations the movie handlers depend on.
///
/// Implementations must hide soft-deleted rows from every method that is not
/// explicitly `*_include_deleted`, and must never reuse an id.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error>;
    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;
    async fn find_by_id_include_deleted(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;
    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error>;
    async fn list_include_deleted(&self) -> Result<Vec<Movie>, sqlx::Error>;
    async fn update(&self, id: DbId, input: &UpdateMovie) -> Result<Option<Movie>, sqlx::Error>;

    /// Returns the number of rows that transitioned to deleted (0 or 1).
    async fn soft_delete(&self, id: DbId) -> Result<u64, sqlx::Error>;

    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed store delegating to [`MovieRepo`].
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        MovieRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn find_by_id_include_deleted(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::find_by_id_include_deleted(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list(&self.pool).await
    }

    async fn list_include_deleted(&self) -> Result<Vec<Movie>, sqlx::Error> {
        MovieRepo::list_include_deleted(&self.pool).await
    }

    async fn update(&self, id: DbId, input: &UpdateMovie) -> Result<Option<Movie>, sqlx::Error> {
        MovieRepo::update(&self.pool, id, input).await
    }

    async fn soft_delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        MovieRepo::soft_delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
