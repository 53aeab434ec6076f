use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::user::CREATE_TABLE_SQL;

/// Open the single connection to the store. The pool is capped at one
/// connection: this process holds exactly one for its lifetime.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url())
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create the users table if it is missing. Not a migration system; this
/// only bootstraps the one table the crate owns.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(CREATE_TABLE_SQL)
        .execute(pool)
        .await
        .context("create users table")?;
    Ok(())
}
