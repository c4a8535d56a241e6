use anyhow::Result;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;

#[tracing::instrument(skip(config))]
pub async fn migrate_command(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.store.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.store.url);
        sqlx::Sqlite::create_database(&config.store.url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.store.url)
        .await?;

    let mut conn = pool.acquire().await?;
    veckoplan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset_command(config: &Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.store.url).await? {
        tracing::warn!("Dropping existing database: {}", config.store.url);
        sqlx::Sqlite::drop_database(&config.store.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await
}
