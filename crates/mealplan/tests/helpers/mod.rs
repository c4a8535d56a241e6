use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use sqlx_migrator::{Migrate, Plan};

use veckoplan_mealplan::store::SqliteStore;
use veckoplan_shared::recipe::Recipe;

pub async fn setup_sqlite_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let mut conn = pool.acquire().await?;
    veckoplan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(SqliteStore::new(pool))
}

#[allow(dead_code)]
pub fn recipe(id: impl Into<String>, tags: &[&str]) -> Recipe {
    let id = id.into();
    Recipe {
        name: id.clone(),
        id,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: vec![],
        image: String::new(),
    }
}

#[allow(dead_code)]
pub fn numbered_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| recipe(format!("r{i}"), &[&format!("t{i}")[..]]))
        .collect()
}
