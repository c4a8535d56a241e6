use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;

use veckoplan_shared::Result;
use veckoplan_shared::mealplan::WeekPlan;
use veckoplan_shared::week::WeekId;

use super::PlanStore;

/// In-memory plan store.
///
/// Backs tests and deployments where the filesystem is read-only; contents
/// last as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    plans: RwLock<HashMap<WeekId, WeekPlan>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PlanStore for MemoryStore {
    async fn get(&self, week_id: &WeekId) -> Result<Option<WeekPlan>> {
        Ok(self.plans.read().await.get(week_id).cloned())
    }

    async fn put(&self, plan: &WeekPlan) -> Result<WeekPlan> {
        self.plans
            .write()
            .await
            .insert(plan.week_id(), plan.clone());

        Ok(plan.clone())
    }

    async fn recent_recipe_ids(&self, excluding: &WeekId) -> Result<HashSet<String>> {
        let plans = self.plans.read().await;

        Ok(plans
            .iter()
            .filter(|(week_id, _)| *week_id != excluding)
            .flat_map(|(_, plan)| plan.recipe_ids().map(str::to_owned))
            .collect())
    }
}
