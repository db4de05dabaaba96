//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_*` environment variables, and config
//! files, in OrthoConfig's usual precedence. Only the database URL is
//! mandatory.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_STORE_TIMEOUT;

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
/// Pool size used when none is configured.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Problems with otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `TODO_DATABASE_URL` (or `--database-url`) was not provided.
    #[error("database URL is required (set TODO_DATABASE_URL)")]
    MissingDatabaseUrl,
    /// The bind address could not be parsed.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr {
        /// Address as configured.
        value: String,
        /// Parser error text.
        message: String,
    },
    /// A zero pool size or store timeout was supplied.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Name of the offending setting.
        field: &'static str,
    },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "TODO")]
pub struct ServiceSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: Option<String>,
    /// Maximum number of pooled connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub pool_max_size: Option<u32>,
    /// Deadline in seconds for each store call.
    #[ortho_config(default = DEFAULT_STORE_TIMEOUT.as_secs())]
    pub store_timeout_secs: Option<u64>,
}

impl ServiceSettings {
    /// Configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Configured listener address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Configured pool size, falling back to [`DEFAULT_POOL_MAX_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Zero`] for a size of zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::Zero {
                field: "pool_max_size",
            }),
            size => Ok(size),
        }
    }

    /// Configured store deadline, falling back to [`DEFAULT_STORE_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Zero`] for a timeout of zero seconds.
    pub fn store_timeout(&self) -> Result<Duration, SettingsError> {
        match self.store_timeout_secs {
            None => Ok(DEFAULT_STORE_TIMEOUT),
            Some(0) => Err(SettingsError::Zero {
                field: "store_timeout_secs",
            }),
            Some(secs) => Ok(Duration::from_secs(secs)),
        }
    }
}
