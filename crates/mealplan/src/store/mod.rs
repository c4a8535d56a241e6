mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::collections::HashSet;

use veckoplan_shared::Result;
use veckoplan_shared::mealplan::WeekPlan;
use veckoplan_shared::week::WeekId;

/// Week-plan persistence boundary.
///
/// Implementations provide last-writer-wins upserts per week id; nothing
/// stronger is assumed, and the planner stays correct when a backend cannot
/// durably persist (the memory store exists for exactly that environment).
#[async_trait::async_trait]
pub trait PlanStore: Send + Sync {
    async fn get(&self, week_id: &WeekId) -> Result<Option<WeekPlan>>;

    /// Upsert. Returns the stored value.
    async fn put(&self, plan: &WeekPlan) -> Result<WeekPlan>;

    /// Recipe ids referenced by every stored week except `excluding`.
    async fn recent_recipe_ids(&self, excluding: &WeekId) -> Result<HashSet<String>>;
}
