//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
/// Address bound when `HOST` is not set.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;
/// User acting on favorites when `FAVORITES_USER_ID` is not set.
pub const DEFAULT_FAVORITES_USER_ID: i32 = 1;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Connection string for PostgreSQL or SQLite
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// User ID favorites are read and written for
    pub favorites_user_id: i32,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve each variable.
    ///
    /// Unset variables fall back to their defaults, set variables that fail to parse
    /// return [`ConfigError::InvalidEnvValue`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse_var("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        let favorites_user_id = match lookup("FAVORITES_USER_ID") {
            Some(value) => parse_var("FAVORITES_USER_ID", &value)?,
            None => DEFAULT_FAVORITES_USER_ID,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            favorites_user_id,
        })
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
