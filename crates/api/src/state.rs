use std::sync::Arc;

use movies_db::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie persistence, built once at startup.
    pub store: Arc<dyn MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
