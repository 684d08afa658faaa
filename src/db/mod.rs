//! Data-access layer: pool bootstrap plus one submodule per entity.
//!
//! Every accessor takes the pool as its first argument; the composing
//! application owns the pool's lifecycle (create on startup, drop on
//! shutdown).
//!
//! Submodules:
//! - `properties`: filtered search and the production insert path
//! - `query`: parameterized-statement assembly used by the search
//! - `reservations`: active-reservation listing for a guest
//! - `users`: lookup and creation

pub mod properties;
pub mod query;
pub mod reservations;
pub mod users;

pub use properties::*;
pub use reservations::*;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::DbError;

/// Builds the connection pool from configuration. Acquisition times out
/// instead of blocking forever on a saturated pool.
pub async fn connect(config: &Config) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}
