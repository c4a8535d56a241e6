use anyhow::Result;
use rand::Rng;

use veckoplan_mealplan::Planner;
use veckoplan_mealplan::store::PlanStore;
use veckoplan_recipe::Catalog;
use veckoplan_shared::mealplan::WeekPlan;
use veckoplan_shared::week::{WeekId, day_labels};

/// Resolves the target week from the optional `--week` and `--offset`
/// arguments: the given (or current) week, shifted by whole weeks.
pub fn resolve_week(week: Option<&str>, offset: Option<i64>) -> Result<WeekId> {
    let week_id = match week {
        Some(raw) => raw.parse()?,
        None => WeekId::current(),
    };

    Ok(match offset {
        Some(delta) => week_id.offset(delta),
        None => week_id,
    })
}

pub async fn show_command<S: PlanStore>(
    planner: &Planner<S>,
    week_id: WeekId,
    json: bool,
) -> Result<()> {
    match planner.plan(&week_id).await? {
        Some(plan) if json => println!("{}", serde_json::to_string_pretty(&plan)?),
        Some(plan) => print_plan(planner.catalog(), &plan),
        None if json => println!("null"),
        None => println!("no plan stored for week {week_id}"),
    }

    Ok(())
}

pub async fn generate_command<S: PlanStore, R: Rng>(
    planner: &Planner<S>,
    week_id: WeekId,
    num_slots: usize,
    rng: &mut R,
) -> Result<()> {
    let plan = planner.generate(week_id, num_slots, rng).await?;
    print_plan(planner.catalog(), &plan);

    Ok(())
}

pub async fn reroll_command<S: PlanStore, R: Rng>(
    planner: &Planner<S>,
    week_id: WeekId,
    index: usize,
    rng: &mut R,
) -> Result<()> {
    let plan = planner.reroll_slot(week_id, index, rng).await?;
    print_plan(planner.catalog(), &plan);

    Ok(())
}

pub async fn set_command<S: PlanStore>(
    planner: &Planner<S>,
    week_id: WeekId,
    index: usize,
    recipe_id: Option<String>,
) -> Result<()> {
    let plan = planner.set_slot(week_id, index, recipe_id).await?;
    print_plan(planner.catalog(), &plan);

    Ok(())
}

pub async fn add_slot_command<S: PlanStore>(planner: &Planner<S>, week_id: WeekId) -> Result<()> {
    let plan = planner.add_slot(week_id).await?;
    print_plan(planner.catalog(), &plan);

    Ok(())
}

pub fn recipes_command(catalog: &Catalog) {
    for recipe in catalog.recipes() {
        println!(
            "{:<20} {:<36} [{}]",
            recipe.id,
            recipe.name,
            recipe.tags.join(", ")
        );
    }
}

fn print_plan(catalog: &Catalog, plan: &WeekPlan) {
    let monday = plan.week_id().monday();
    println!(
        "week {} ({} slots, Monday {:04}-{:02}-{:02})",
        plan.week_id(),
        plan.num_slots(),
        monday.year(),
        monday.month() as u8,
        monday.day()
    );

    for (label, slot) in day_labels(plan.num_slots()).iter().zip(plan.slots()) {
        let dish = match slot.as_deref() {
            // Dangling ids render as the raw id; the plan stays valid.
            Some(id) => catalog
                .get(id)
                .map_or_else(|| format!("{id} (not in catalog)"), |r| r.name.clone()),
            None => "-".to_string(),
        };
        println!("  {label:<10} {dish}");
    }
}
