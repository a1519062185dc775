//! Database connection settings.

use std::fmt;
use std::str::FromStr;

use movies_core::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Connection parameters for the movies database.
///
/// `url` wins over the discrete fields when present.
#[derive(Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub ssl_mode: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | (unset)     |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_NAME`            | `postgres`  |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | required unless `DATABASE_URL` is set |
    /// | `DB_SSL_MODE`        | `disable`   |
    /// | `DB_MAX_CONNECTIONS` | `20`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let url = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty());

        let password = match (lookup("DB_PASSWORD"), &url) {
            (Some(p), _) => p,
            (None, Some(_)) => String::new(),
            (None, None) => return Err(ConfigError::Missing("DB_PASSWORD")),
        };

        let port_raw = get("DB_PORT", "5432");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "DB_PORT",
            value: port_raw.clone(),
        })?;

        let max_raw = get("DB_MAX_CONNECTIONS", "20");
        let max_connections = max_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: max_raw.clone(),
        })?;

        let ssl_mode = get("DB_SSL_MODE", "disable");
        if PgSslMode::from_str(&ssl_mode).is_err() {
            return Err(ConfigError::Invalid {
                key: "DB_SSL_MODE",
                value: ssl_mode,
            });
        }

        Ok(Self {
            url,
            host: get("DB_HOST", "localhost"),
            port,
            database: get("DB_NAME", "postgres"),
            user: get("DB_USER", "postgres"),
            password,
            ssl_mode,
            max_connections,
        })
    }

    /// Translate into sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(PgSslMode::from_str(&self.ssl_mode)?))
    }
}

// Hand-written so the password never reaches logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
