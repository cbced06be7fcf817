//! Database connection pool management

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};

use crate::config::DatabaseConfig;

/// Maximum connections for the pool.
const MAX_CONNECTIONS: u32 = 10;

/// Open a pool against the configured database and make sure it answers.
pub(crate) async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::Disable);

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    pool.acquire().await?.ping().await?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "connected to database"
    );

    Ok(pool)
}
