//! Runtime configuration loaded from the environment.
//!
//! Settings:
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: pool acquire timeout (default 5)

use std::env;

/// Connection settings for [`crate::db::connect`].
///
/// Read once at startup by the composing application and handed to the pool
/// constructor; this crate never touches the environment after that.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first when
    /// present. `DATABASE_URL` is required; the pool knobs fall back to
    /// defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }
}
