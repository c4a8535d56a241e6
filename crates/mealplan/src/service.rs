use rand::Rng;

use veckoplan_recipe::Catalog;
use veckoplan_shared::mealplan::{MAX_SLOTS, WeekPlan};
use veckoplan_shared::week::WeekId;
use veckoplan_shared::{Error, Result};

use crate::picker;
use crate::store::PlanStore;

/// Caller-facing planning operations on top of a catalog and a plan store.
///
/// The random source is injected per call; the process-global generator only
/// appears at the application boundary.
pub struct Planner<S: PlanStore> {
    catalog: Catalog,
    store: S,
    default_slots: usize,
}

impl<S: PlanStore> Planner<S> {
    pub fn new(catalog: Catalog, store: S, default_slots: usize) -> Self {
        Self {
            catalog,
            store,
            default_slots,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn plan(&self, week_id: &WeekId) -> Result<Option<WeekPlan>> {
        self.store.get(week_id).await
    }

    /// Generates and persists a fresh plan for the week, replacing any
    /// existing assignment. Recipes on other stored weeks are avoided while
    /// enough unused ones remain; an empty catalog yields an all-empty plan.
    pub async fn generate<R: Rng>(
        &self,
        week_id: WeekId,
        num_slots: usize,
        rng: &mut R,
    ) -> Result<WeekPlan> {
        if num_slots == 0 || num_slots > MAX_SLOTS {
            return Err(Error::OutOfRange {
                index: num_slots,
                len: MAX_SLOTS,
            });
        }

        let recent_ids = self.store.recent_recipe_ids(&week_id).await?;
        let picks = picker::pick_week(self.catalog.recipes(), num_slots, &recent_ids, rng);
        tracing::info!(
            week = %week_id,
            slots = num_slots,
            picked = picks.len(),
            "week plan generated"
        );

        self.store
            .put(&WeekPlan::from_picks(week_id, num_slots, picks))
            .await
    }

    /// Replaces one slot with a recipe not already on the week. When every
    /// catalog entry is in use the plan is returned unchanged.
    pub async fn reroll_slot<R: Rng>(
        &self,
        week_id: WeekId,
        index: usize,
        rng: &mut R,
    ) -> Result<WeekPlan> {
        let mut plan = self
            .store
            .get(&week_id)
            .await?
            .ok_or_else(|| Error::PlanNotFound(week_id.to_string()))?;

        if index >= plan.num_slots() {
            return Err(Error::OutOfRange {
                index,
                len: plan.num_slots(),
            });
        }

        match picker::pick_replacement(self.catalog.recipes(), plan.slots(), rng) {
            Some(recipe_id) => {
                plan.set_slot(index, Some(recipe_id))?;
                self.store.put(&plan).await
            }
            None => {
                tracing::info!(week = %week_id, index, "no unused recipe left, slot kept");
                Ok(plan)
            }
        }
    }

    /// Manual pick (`Some`) or removal (`None`) of one slot. The first edit
    /// of a week creates an all-empty plan with the default slot count. The
    /// id is not checked against the catalog; slots are weak references.
    pub async fn set_slot(
        &self,
        week_id: WeekId,
        index: usize,
        recipe_id: Option<String>,
    ) -> Result<WeekPlan> {
        let mut plan = self.load_or_empty(&week_id).await?;
        plan.set_slot(index, recipe_id)?;

        self.store.put(&plan).await
    }

    /// Appends one empty slot, up to the seven-day ceiling.
    pub async fn add_slot(&self, week_id: WeekId) -> Result<WeekPlan> {
        let mut plan = self.load_or_empty(&week_id).await?;
        plan.add_slot()?;

        self.store.put(&plan).await
    }

    async fn load_or_empty(&self, week_id: &WeekId) -> Result<WeekPlan> {
        Ok(self
            .store
            .get(week_id)
            .await?
            .unwrap_or_else(|| WeekPlan::empty(*week_id, self.default_slots)))
    }
}
