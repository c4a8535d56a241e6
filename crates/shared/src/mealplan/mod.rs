use serde::{Deserialize, Serialize};

use crate::week::WeekId;
use crate::{Error, Result};

/// Hard ceiling on day slots per week.
pub const MAX_SLOTS: usize = 7;

/// One week's dinner assignment: an optional recipe id per day slot.
///
/// Slots hold weak references; an id no longer present in the catalog reads
/// as an empty slot, it never fails. The type keeps `slots.len() == num_slots`
/// across every constructor and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    week_id: WeekId,
    num_slots: usize,
    slots: Vec<Option<String>>,
}

impl WeekPlan {
    /// Builds a plan from picked recipe ids, padding with empty slots up to
    /// `num_slots`. Picks beyond `num_slots` are dropped.
    pub fn from_picks(week_id: WeekId, num_slots: usize, picks: Vec<String>) -> Self {
        let mut slots: Vec<Option<String>> =
            picks.into_iter().take(num_slots).map(Some).collect();
        slots.resize(num_slots, None);

        Self {
            week_id,
            num_slots,
            slots,
        }
    }

    /// An all-empty plan, the state of a week first touched by a manual edit.
    pub fn empty(week_id: WeekId, num_slots: usize) -> Self {
        Self {
            week_id,
            num_slots,
            slots: vec![None; num_slots],
        }
    }

    /// Rebuilds a plan from stored parts. The slot vector is resized to
    /// `num_slots` so the length invariant holds even for rows edited outside
    /// the application.
    pub fn from_parts(week_id: WeekId, num_slots: usize, mut slots: Vec<Option<String>>) -> Self {
        slots.resize(num_slots, None);

        Self {
            week_id,
            num_slots,
            slots,
        }
    }

    pub fn week_id(&self) -> WeekId {
        self.week_id
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Assigns (`Some`) or clears (`None`) one slot.
    pub fn set_slot(&mut self, index: usize, recipe_id: Option<String>) -> Result<()> {
        if index >= self.num_slots {
            return Err(Error::OutOfRange {
                index,
                len: self.num_slots,
            });
        }
        self.slots[index] = recipe_id;

        Ok(())
    }

    /// Appends one empty slot. Capacity only ever grows, up to [`MAX_SLOTS`].
    pub fn add_slot(&mut self) -> Result<()> {
        if self.num_slots >= MAX_SLOTS {
            return Err(Error::OutOfRange {
                index: self.num_slots,
                len: MAX_SLOTS,
            });
        }
        self.num_slots += 1;
        self.slots.push(None);

        Ok(())
    }

    /// Non-empty recipe ids in slot order.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> WeekId {
        "2026-W08".parse().unwrap()
    }

    #[test]
    fn test_from_picks_pads_and_truncates() {
        let plan = WeekPlan::from_picks(week(), 4, vec!["a".into(), "b".into()]);
        assert_eq!(plan.num_slots(), 4);
        assert_eq!(plan.slots().len(), 4);
        assert_eq!(plan.slots()[0].as_deref(), Some("a"));
        assert_eq!(plan.slots()[2], None);

        let plan = WeekPlan::from_picks(week(), 1, vec!["a".into(), "b".into()]);
        assert_eq!(plan.slots(), &[Some("a".to_owned())]);
    }

    #[test]
    fn test_set_slot_bounds() {
        let mut plan = WeekPlan::empty(week(), 3);
        plan.set_slot(2, Some("fisktacos".into())).unwrap();
        assert_eq!(plan.slots()[2].as_deref(), Some("fisktacos"));

        plan.set_slot(2, None).unwrap();
        assert!(plan.is_empty());

        let err = plan.set_slot(3, Some("fisktacos".into())).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(plan.slots().len(), plan.num_slots());
    }

    #[test]
    fn test_add_slot_grows_until_ceiling() {
        let mut plan = WeekPlan::empty(week(), 5);
        plan.add_slot().unwrap();
        plan.add_slot().unwrap();
        assert_eq!(plan.num_slots(), 7);
        assert_eq!(plan.slots().len(), 7);

        let err = plan.add_slot().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 7, len: 7 }));
        assert_eq!(plan.num_slots(), 7);
    }

    #[test]
    fn test_recipe_ids_skips_empty_slots() {
        let mut plan = WeekPlan::empty(week(), 4);
        plan.set_slot(1, Some("linssoppa".into())).unwrap();
        plan.set_slot(3, Some("hamburgare".into())).unwrap();
        let ids: Vec<_> = plan.recipe_ids().collect();
        assert_eq!(ids, vec!["linssoppa", "hamburgare"]);
    }

    #[test]
    fn test_from_parts_restores_slot_length() {
        let plan = WeekPlan::from_parts(week(), 5, vec![Some("a".into()), None]);
        assert_eq!(plan.slots().len(), 5);
    }
}
