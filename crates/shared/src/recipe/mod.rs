use serde::{Deserialize, Serialize};

/// A catalog entry. Loaded once at startup from a static source and read-only
/// afterwards; the planning core never mutates recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque stable identifier, unique across the catalog.
    pub id: String,
    pub name: String,
    /// Short category labels used by the variety heuristic.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Static asset reference, opaque to the core.
    #[serde(default)]
    pub image: String,
}
