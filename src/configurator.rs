//! Single reducer surface over a selection.
//!
//! The [`Configurator`] owns the injected catalog and asset table together
//! with the current [`SelectionState`]. Every mutation goes through
//! [`Configurator::apply`], which consults the category gate first; derived
//! values are recomputed on demand and never cached.

use crate::gate::{self, Gate};
use crate::layers::{layers_for, Layer};
use crate::model::{AssetTable, Catalog, CategoryId, Flag, SelectionState, SlotKind};
use crate::pricing::{price, PriceBreakdown};
use crate::progress::{completed, progress_percent};
use crate::summary::ConfigurationSummary;
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectChassis(String),
    SelectModel(String),
    SetSlot(SlotKind, String),
    Toggle(String),
    SetFlag(Flag, bool),
    SetOwnsVan(bool),
    Reset,
}

pub struct Configurator {
    catalog: Catalog,
    assets: AssetTable,
    state: SelectionState,
}

impl Configurator {
    #[must_use]
    pub fn new(catalog: Catalog, assets: AssetTable) -> Self {
        Self {
            catalog,
            assets,
            state: SelectionState::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn assets(&self) -> &AssetTable {
        &self.assets
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Category an action edits, or `None` for ungated actions.
    fn target(&self, action: &Action) -> Option<CategoryId> {
        match action {
            Action::SelectChassis(_) => Some(CategoryId::Chassis),
            Action::SelectModel(_) => Some(CategoryId::Model),
            Action::SetSlot(slot, _) => Some(slot.category()),
            // Unknown ids are gated like any add-on.
            Action::Toggle(id) => Some(
                self.catalog
                    .category_of(id)
                    .unwrap_or(CategoryId::Electrical),
            ),
            Action::SetFlag(..) | Action::SetOwnsVan(_) | Action::Reset => None,
        }
    }

    /// Applies an action. Returns `false` without touching state when the
    /// targeted category is locked.
    pub fn apply(&mut self, action: Action) -> bool {
        let gate = self.gate();
        if let Some(category) = self.target(&action) {
            if !gate.is_unlocked(category) {
                debug!(?action, ?category, "ignored action on locked category");
                return false;
            }
        }

        let state = std::mem::take(&mut self.state);
        let catalog = &self.catalog;
        self.state = match action {
            Action::SelectChassis(id) => state.select_chassis(&id),
            Action::SelectModel(id) => state.select_model(catalog, &id),
            Action::SetSlot(slot, id) => state.set_exclusive_slot(catalog, slot, &id),
            Action::Toggle(id) => state.toggle_option(catalog, &id),
            Action::SetFlag(flag, value) => state.set_flag(flag, value),
            Action::SetOwnsVan(value) => state.set_owns_van(value),
            Action::Reset => state.reset(),
        };
        true
    }

    /// Applies a bare id the way clicking it would, dispatching on its category.
    pub fn select(&mut self, id: &str) -> bool {
        let action = match self.catalog.category_of(id) {
            Some(CategoryId::Chassis) => Action::SelectChassis(id.to_string()),
            Some(CategoryId::Model) => Action::SelectModel(id.to_string()),
            Some(_) => match self.catalog.slot_of(id) {
                Some(slot) => Action::SetSlot(slot, id.to_string()),
                None => Action::Toggle(id.to_string()),
            },
            None => Action::Toggle(id.to_string()),
        };
        self.apply(action)
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        gate::evaluate(&self.state)
    }

    #[must_use]
    pub fn price(&self) -> PriceBreakdown {
        price(&self.state, &self.catalog)
    }

    #[must_use]
    pub fn layers(&self) -> Vec<Layer> {
        layers_for(&self.state, &self.catalog, &self.assets)
    }

    #[must_use]
    pub fn completed(&self) -> BTreeSet<CategoryId> {
        completed(&self.state, &self.catalog)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(&self.state, &self.catalog)
    }

    #[must_use]
    pub fn summary(&self) -> ConfigurationSummary {
        ConfigurationSummary::new(&self.state, &self.catalog)
    }
}
