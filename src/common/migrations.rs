// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Creates the schema. With `reset` the tables are dropped first.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("RESET_DB=true - Dropping all tables and recreating schema");
        drop_all_tables(pool).await?;
    }

    create_user_tables(pool).await?;

    info!("Database migration completed");
    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
