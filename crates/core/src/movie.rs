//! Movie lifecycle rules shared by the persistence and HTTP layers.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Entity name used in not-found errors and log events.
pub const MOVIE_ENTITY: &str = "Movie";

/// Body of a successful `DELETE /movies/{id}` response.
///
/// The spelling is part of the wire contract clients already match on.
pub const MOVIE_DELETED_MESSAGE: &str = "Movie deleted sucessfully";

/// Lifecycle state of a movie row, derived from its nullable `deleted_at` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieState {
    Active,
    Deleted { at: Timestamp },
}

impl MovieState {
    pub fn from_deleted_at(deleted_at: Option<Timestamp>) -> Self {
        match deleted_at {
            Some(at) => Self::Deleted { at },
            None => Self::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Parse a raw path segment into a movie id.
///
/// Only plain decimal digits are accepted; anything else (signs, whitespace,
/// overflow) yields `None` and is reported to clients as not found.
pub fn parse_movie_id(raw: &str) -> Option<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Run `validator` rules on a DTO, flattening failures into [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(format_validation_errors(&errors)))
}

/// Render field errors as `field: message` pairs, sorted by field name so the
/// output is stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let detail = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
