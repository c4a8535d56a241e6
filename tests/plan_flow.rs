use rand::SeedableRng;
use rand::rngs::StdRng;

use veckoplan::cli;
use veckoplan_mealplan::Planner;
use veckoplan_mealplan::store::MemoryStore;
use veckoplan_recipe::Catalog;
use veckoplan_shared::week::WeekId;

fn week(raw: &str) -> WeekId {
    raw.parse().unwrap()
}

#[tokio::test]
async fn test_full_week_flow_with_seed_catalog() {
    let planner = Planner::new(Catalog::load().unwrap(), MemoryStore::new(), 5);
    let mut rng = StdRng::seed_from_u64(2026);

    let plan = planner.generate(week("2026-W08"), 5, &mut rng).await.unwrap();
    assert_eq!(plan.num_slots(), 5);
    assert_eq!(plan.recipe_ids().count(), 5);

    // Every pick must resolve against the seed catalog.
    for id in plan.recipe_ids() {
        assert!(planner.catalog().get(id).is_some(), "unknown pick {id}");
    }

    // The next week avoids everything just planned: 22 recipes leave plenty.
    let next = planner.generate(week("2026-W09"), 5, &mut rng).await.unwrap();
    let used: Vec<_> = plan.recipe_ids().collect();
    for id in next.recipe_ids() {
        assert!(!used.contains(&id), "{id} repeated across adjacent weeks");
    }

    // Manual editing keeps the slot invariant through every mutation.
    let edited = planner
        .set_slot(week("2026-W08"), 0, Some("fisktacos".to_owned()))
        .await
        .unwrap();
    assert_eq!(edited.slots().len(), edited.num_slots());

    let grown = planner.add_slot(week("2026-W08")).await.unwrap();
    assert_eq!(grown.num_slots(), 6);
    assert_eq!(grown.slots().len(), 6);

    let rerolled = planner
        .reroll_slot(week("2026-W08"), 5, &mut rng)
        .await
        .unwrap();
    assert_eq!(rerolled.slots().len(), 6);
    assert!(rerolled.slots()[5].is_some(), "empty slot should be filled");
}

#[test]
fn test_resolve_week_applies_offset() {
    let resolved = cli::resolve_week(Some("2020-W53"), Some(1)).unwrap();
    assert_eq!(resolved.to_string(), "2021-W01");

    let resolved = cli::resolve_week(Some("2026-W08"), None).unwrap();
    assert_eq!(resolved.to_string(), "2026-W08");

    assert!(cli::resolve_week(Some("garbage"), None).is_err());
}
