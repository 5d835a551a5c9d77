use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub type DbPool = SqlitePool;

/// Open the SQLite pool. Foreign keys are enforced on every connection; the
/// database file is created on first startup.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Insert the base categories when the table is empty, so a fresh database
/// starts out usable.
pub async fn seed_default_categories(pool: &DbPool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (name, description) in [
        ("Electrónica", "Dispositivos electrónicos"),
        ("Hogar", "Artículos para el hogar"),
        ("Ropa", "Prendas de vestir"),
    ] {
        sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(pool)
            .await?;
    }

    tracing::info!("seeded default categories");
    Ok(())
}
