use axum::http::HeaderValue;
use movies_core::error::ConfigError;

use crate::query::parse_bool;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// Apply pending migrations before serving (default: `true`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                 |
    /// |------------------|-------------------------|
    /// | `HOST`           | `0.0.0.0`               |
    /// | `PORT`           | `8080`                  |
    /// | `CORS_ORIGINS`   | `http://localhost:5173` |
    /// | `RUN_MIGRATIONS` | `true`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        if host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::Invalid {
                key: "HOST",
                value: host,
            });
        }

        let port_raw = lookup("PORT").unwrap_or_else(|| "8080".into());
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "PORT",
            value: port_raw.clone(),
        })?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let migrations_raw = lookup("RUN_MIGRATIONS").unwrap_or_else(|| "true".into());
        let run_migrations = parse_bool(&migrations_raw).ok_or(ConfigError::Invalid {
            key: "RUN_MIGRATIONS",
            value: migrations_raw.clone(),
        })?;

        Ok(Self {
            host,
            port,
            cors_origins,
            run_migrations,
        })
    }
}
