//! Slot selection for a week of dinners.
//!
//! Pure functions over the catalog; the random source is always supplied by
//! the caller so selection stays deterministic under test.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use veckoplan_shared::recipe::Recipe;

/// Picks up to `num_slots` distinct recipe ids for one week.
///
/// Recipes outside `recent_ids` form the candidate pool. When too few of them
/// remain to fill the week, recently used recipes join the pool behind the
/// unused ones: recency is advisory and never leaves a fillable slot empty,
/// but unused recipes are always consumed first.
///
/// A greedy walk prefers candidates that bring a tag not yet on the week, and
/// drops that preference once two or fewer slots remain. Whatever gaps the
/// variety pass leaves are filled with any recipe not already picked. The
/// result never repeats an id while distinct recipes remain; a catalog
/// smaller than `num_slots` yields a short pick list and the caller keeps the
/// leftover slots empty.
pub fn pick_week<R: Rng + ?Sized>(
    catalog: &[Recipe],
    num_slots: usize,
    recent_ids: &HashSet<String>,
    rng: &mut R,
) -> Vec<String> {
    let (mut pool, mut recent): (Vec<&Recipe>, Vec<&Recipe>) =
        catalog.iter().partition(|r| !recent_ids.contains(&r.id));
    pool.shuffle(rng);

    if pool.len() < num_slots {
        recent.shuffle(rng);
        pool.extend(recent);
    }

    let mut picked: Vec<&Recipe> = Vec::with_capacity(num_slots);
    let mut used_tags: HashSet<&str> = HashSet::new();

    for &recipe in &pool {
        if picked.len() >= num_slots {
            break;
        }
        let has_new_tag = recipe.tags.iter().any(|t| !used_tags.contains(t.as_str()));
        if has_new_tag || picked.len() + 2 >= num_slots {
            picked.push(recipe);
            used_tags.extend(recipe.tags.iter().map(String::as_str));
        }
    }

    for &recipe in &pool {
        if picked.len() >= num_slots {
            break;
        }
        if !picked.iter().any(|p| p.id == recipe.id) {
            picked.push(recipe);
        }
    }

    picked.into_iter().map(|r| r.id.clone()).collect()
}

/// One uniformly-random recipe not already on the week, or `None` when every
/// catalog entry is in use (the caller then keeps the existing assignment).
///
/// No tag heuristic here; a single slot has nothing to vary against.
pub fn pick_replacement<R: Rng + ?Sized>(
    catalog: &[Recipe],
    current_slots: &[Option<String>],
    rng: &mut R,
) -> Option<String> {
    let used: HashSet<&str> = current_slots.iter().flatten().map(String::as_str).collect();
    let available: Vec<&Recipe> = catalog
        .iter()
        .filter(|r| !used.contains(r.id.as_str()))
        .collect();

    available.choose(rng).map(|r| r.id.clone())
}
