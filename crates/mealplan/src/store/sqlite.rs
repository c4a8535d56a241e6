use std::collections::HashSet;

use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use sqlx::prelude::FromRow;

use veckoplan_db::table::PlanWeek;
use veckoplan_shared::Result;
use veckoplan_shared::mealplan::WeekPlan;
use veckoplan_shared::week::WeekId;

use super::PlanStore;

#[derive(FromRow)]
struct PlanRow {
    week_id: String,
    num_slots: i64,
    slots: Vec<u8>,
}

impl PlanRow {
    fn into_plan(self) -> Result<WeekPlan> {
        let week_id: WeekId = self.week_id.parse()?;
        let slots: Vec<Option<String>> = bitcode::decode(&self.slots)?;

        Ok(WeekPlan::from_parts(week_id, self.num_slots as usize, slots))
    }
}

/// SQLite-backed plan store: one row per week, slots bitcode-encoded.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PlanStore for SqliteStore {
    async fn get(&self, week_id: &WeekId) -> Result<Option<WeekPlan>> {
        let statement = Query::select()
            .columns([PlanWeek::WeekId, PlanWeek::NumSlots, PlanWeek::Slots])
            .from(PlanWeek::Table)
            .and_where(Expr::col(PlanWeek::WeekId).eq(week_id.to_string()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(PlanRow::into_plan).transpose()
    }

    async fn put(&self, plan: &WeekPlan) -> Result<WeekPlan> {
        let slots = bitcode::encode(plan.slots());

        let mut statement = Query::insert()
            .into_table(PlanWeek::Table)
            .columns([PlanWeek::WeekId, PlanWeek::NumSlots, PlanWeek::Slots])
            .to_owned();

        statement.values_panic([
            plan.week_id().to_string().into(),
            (plan.num_slots() as i64).into(),
            slots.into(),
        ]);

        statement.on_conflict(
            OnConflict::column(PlanWeek::WeekId)
                .update_columns([PlanWeek::NumSlots, PlanWeek::Slots])
                .to_owned(),
        );

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(week = %plan.week_id(), slots = plan.num_slots(), "plan stored");

        Ok(plan.clone())
    }

    async fn recent_recipe_ids(&self, excluding: &WeekId) -> Result<HashSet<String>> {
        let statement = Query::select()
            .columns([PlanWeek::WeekId, PlanWeek::NumSlots, PlanWeek::Slots])
            .from(PlanWeek::Table)
            .and_where(Expr::col(PlanWeek::WeekId).ne(excluding.to_string()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        let mut ids = HashSet::new();
        for row in rows {
            let plan = row.into_plan()?;
            ids.extend(plan.recipe_ids().map(str::to_owned));
        }

        Ok(ids)
    }
}
