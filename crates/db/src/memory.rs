//! In-memory [`MovieStore`] for tests and database-less local runs.

use async_trait::async_trait;
use chrono::Utc;
use movies_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::store::MovieStore;

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    rows: Vec<Movie>,
}

/// Keeps rows in a `Vec` guarded by a `RwLock`. Ids start at 1 and only grow.
#[derive(Debug)]
pub struct MemoryMovieStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Total rows held, soft-deleted ones included.
    pub async fn row_count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn create(&self, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let movie = Movie {
            id: inner.next_id,
            title: input.title.clone(),
            year: input.year.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.next_id += 1;
        inner.rows.push(movie.clone());
        Ok(movie)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .find(|m| m.id == id && m.state().is_active())
            .cloned())
    }

    async fn find_by_id_include_deleted(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .filter(|m| m.state().is_active())
            .cloned()
            .collect())
    }

    async fn list_include_deleted(&self) -> Result<Vec<Movie>, sqlx::Error> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn update(&self, id: DbId, input: &UpdateMovie) -> Result<Option<Movie>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let Some(movie) = inner
            .rows
            .iter_mut()
            .find(|m| m.id == id && m.state().is_active())
        else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            movie.title = title.clone();
        }
        if let Some(year) = &input.year {
            movie.year = year.clone();
        }
        movie.updated_at = Utc::now();
        Ok(Some(movie.clone()))
    }

    async fn soft_delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let mut inner = self.inner.write().await;
        match inner
            .rows
            .iter_mut()
            .find(|m| m.id == id && m.state().is_active())
        {
            Some(movie) => {
                movie.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_movie(title: &str, year: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            year: year.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let store = MemoryMovieStore::new();
        let a = store.create(&new_movie("A", "2001")).await.unwrap();
        let b = store.create(&new_movie("B", "2002")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryMovieStore::new();
        let a = store.create(&new_movie("A", "2001")).await.unwrap();
        store.soft_delete(a.id).await.unwrap();
        let b = store.create(&new_movie("B", "2002")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_hidden_but_kept() {
        let store = MemoryMovieStore::new();
        let movie = store.create(&new_movie("Gone", "1999")).await.unwrap();

        assert_eq!(store.soft_delete(movie.id).await.unwrap(), 1);
        assert!(store.find_by_id(movie.id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());

        let kept = store
            .find_by_id_include_deleted(movie.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!kept.state().is_active());
        assert_eq!(store.list_include_deleted().await.unwrap().len(), 1);
        assert_eq!(store.row_count().await, 1);
    }

    #[tokio::test]
    async fn second_soft_delete_affects_nothing() {
        let store = MemoryMovieStore::new();
        let movie = store.create(&new_movie("Twice", "2010")).await.unwrap();
        assert_eq!(store.soft_delete(movie.id).await.unwrap(), 1);
        assert_eq!(store.soft_delete(movie.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = MemoryMovieStore::new();
        let movie = store.create(&new_movie("Old", "2000")).await.unwrap();

        let patch = UpdateMovie {
            title: Some("New".into()),
            year: None,
        };
        let updated = store.update(movie.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.year, "2000");
        assert!(updated.updated_at >= movie.updated_at);
        assert_eq!(updated.created_at, movie.created_at);
    }

    #[tokio::test]
    async fn update_skips_deleted_rows() {
        let store = MemoryMovieStore::new();
        let movie = store.create(&new_movie("Old", "2000")).await.unwrap();
        store.soft_delete(movie.id).await.unwrap();

        let patch = UpdateMovie {
            title: Some("New".into()),
            year: None,
        };
        assert!(store.update(movie.id, &patch).await.unwrap().is_none());
    }
}
