use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::StoreConfig;

/// Connection pool for the SQLite plan store. Run `veckoplan migrate` first;
/// the schema is not created implicitly.
pub async fn connect(store: &StoreConfig) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(store.max_connections)
        .connect(&store.url)
        .await?;

    Ok(pool)
}
