//! Completed categories and progress percentage.

use crate::model::{Catalog, CategoryId, SelectionState};
use std::collections::BTreeSet;

/// Categories with at least one active selection.
///
/// Derived on every call, so removing the last option of one category can
/// only ever drop that category.
#[must_use]
pub fn completed(state: &SelectionState, catalog: &Catalog) -> BTreeSet<CategoryId> {
    let mut done = BTreeSet::new();

    if state.chassis_id.is_some() {
        done.insert(CategoryId::Chassis);
    }
    if state.model_id.is_some() {
        done.insert(CategoryId::Model);
    }
    // Only a catalog entry that fits its slot counts; unknown ids are inert.
    done.extend(
        state
            .slots
            .iter()
            .filter(|(slot, id)| catalog.slot_of(id) == Some(**slot))
            .map(|(slot, _)| slot.category()),
    );
    done.extend(
        state
            .toggles
            .iter()
            .filter_map(|id| catalog.lookup(id))
            .filter(|item| item.category.is_toggle() || item.add_on)
            .map(|item| item.category),
    );

    done
}

/// Share of categories completed, rounded, in `0..=100`.
#[must_use]
pub fn progress_percent(state: &SelectionState, catalog: &Catalog) -> u8 {
    percent_of(completed(state, catalog).len(), CategoryId::ALL.len())
}

fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (100.0 * done as f64 / total as f64).round();
    percent.clamp(0.0, 100.0) as u8
}
