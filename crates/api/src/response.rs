//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by endpoints that have no entity to echo.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
