use std::path::Path;

use rust_embed::RustEmbed;

use veckoplan_shared::recipe::Recipe;
use veckoplan_shared::{Error, Result};

#[derive(RustEmbed)]
#[folder = "data/"]
struct Assets;

/// The recipe catalog, loaded once and treated as read-only by everything
/// downstream.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Loads the embedded seed catalog.
    pub fn load() -> Result<Self> {
        let file = Assets::get("recipes.json").ok_or(Error::CatalogEmpty)?;

        Self::from_json(&file.data)
    }

    /// Loads a catalog from a JSON file on disk, for deployments shipping
    /// their own recipe set.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::Unknown(anyhow::anyhow!("read {}: {e}", path.display())))?;

        Self::from_json(&data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_slice(data)?;
        tracing::debug!(count = recipes.len(), "catalog loaded");

        Ok(Self { recipes })
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks a recipe up by id. Plans may hold ids that are no longer in the
    /// catalog; callers render those slots as empty.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
