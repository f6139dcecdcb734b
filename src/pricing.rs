//! Price breakdown derived from a selection.

use crate::model::{Catalog, SelectionState};
use serde::Serialize;

/// Four-number price summary in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub chassis: u64,
    pub model: u64,
    pub upgrades: u64,
    pub total: u64,
}

/// Prices the current selection. Ids the catalog does not know cost nothing.
#[must_use]
pub fn price(state: &SelectionState, catalog: &Catalog) -> PriceBreakdown {
    let chassis = if state.owns_van {
        0
    } else {
        state
            .chassis_id
            .as_deref()
            .map_or(0, |id| catalog.price_of(id))
    };

    let model = state
        .model_id
        .as_deref()
        .map_or(0, |id| catalog.price_of(id));

    let upgrades = state
        .upgrade_ids()
        .into_iter()
        .map(|id| catalog.price_of(id))
        .sum();

    PriceBreakdown {
        chassis,
        model,
        upgrades,
        total: chassis + model + upgrades,
    }
}
