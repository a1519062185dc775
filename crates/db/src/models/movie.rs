//! Movie entity model and DTOs.

use std::sync::LazyLock;

use movies_core::movie::MovieState;
use movies_core::types::{DbId, Timestamp};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Matches any value holding at least one non-whitespace character.
static NOT_BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S").expect("NOT_BLANK pattern is valid"));

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Only serialized for soft-deleted rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

impl Movie {
    pub fn state(&self) -> MovieState {
        MovieState::from_deleted_at(self.deleted_at)
    }
}

/// DTO for creating a new movie. Both fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(regex(path = *NOT_BLANK, message = "must not be blank"))]
    pub title: String,
    #[validate(regex(path = *NOT_BLANK, message = "must not be blank"))]
    pub year: String,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(regex(path = *NOT_BLANK, message = "must not be blank"))]
    pub title: Option<String>,
    #[validate(regex(path = *NOT_BLANK, message = "must not be blank"))]
    pub year: Option<String>,
}

impl UpdateMovie {
    /// Whether the patch would change anything.
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.year.is_some()
    }
}
