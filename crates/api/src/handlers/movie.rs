//! Handlers for the `/movies` resource.
//!
//! Path ids are taken as raw strings, and path rejections are kept, so a
//! segment that is not a valid id is reported as 404 rather than axum's
//! default 400. Bodies are taken as `Result<Json<_>, JsonRejection>` so every
//! malformed body is a JSON 400.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::{parse_movie_id, validate_input, MOVIE_DELETED_MESSAGE, MOVIE_ENTITY};
use movies_core::types::DbId;
use movies_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::query::IncludeDeletedParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn movie_id(raw: &str) -> AppResult<DbId> {
    parse_movie_id(raw)
        .ok_or_else(|| AppError::NotFound(format!("{MOVIE_ENTITY} with id {raw} not found")))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id,
    })
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<IncludeDeletedParams>, QueryRejection>,
) -> AppResult<Json<Movie>> {
    let Path(raw_id) = path?;
    let id = movie_id(&raw_id)?;
    let Query(params) = query?;
    let movie = if params.include_deleted {
        state.store.find_by_id_include_deleted(id).await?
    } else {
        state.store.find_by_id(id).await?
    };
    Ok(Json(movie.ok_or_else(|| not_found(id))?))
}

/// GET /movies
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<IncludeDeletedParams>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(params) = query?;
    let movies = if params.include_deleted {
        state.store.list_include_deleted().await?
    } else {
        state.store.list().await?
    };
    Ok(Json(movies))
}

/// POST /movies
///
/// Responds 200 (not 201) with the created row.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(input) = payload?;
    validate_input(&input)?;

    let movie = state.store.create(&input).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateMovie>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Path(raw_id) = path?;
    let id = movie_id(&raw_id)?;
    let Json(input) = payload?;
    if !input.has_changes() {
        return Err(AppError::BadRequest(
            "At least one of title or year must be provided".into(),
        ));
    }
    validate_input(&input)?;

    let movie = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
///
/// Soft-deletes the row. Deleting an unknown or already deleted id is a 404.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(raw_id) = path?;
    let id = movie_id(&raw_id)?;
    let affected = state.store.soft_delete(id).await?;
    if affected == 0 {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = id, "Movie soft-deleted");
    Ok(Json(MessageResponse {
        message: MOVIE_DELETED_MESSAGE,
    }))
}
