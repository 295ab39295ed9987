pub mod models;
pub mod store;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub use models::{AdminStaffRow, RoleLockoutRow};
pub use store::{AccountStore, PgAccountStore};

use crate::config::DatabaseConfig;

/// Opens the connection pool. Fails fast: an unreachable database at startup
/// is a deployment problem, not something to limp along with.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    Ok(pool)
}
