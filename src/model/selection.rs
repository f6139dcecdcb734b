use super::{Catalog, CategoryId, SlotKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Independent layout flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    Bed,
    Seats,
}

/// The mutable core of a configuration.
///
/// Every transition consumes the current value and returns the next one, so a
/// caller holding the previous state never observes a half-applied change.
/// Unknown ids are accepted everywhere and simply fail to match the catalog
/// later on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub chassis_id: Option<String>,
    pub model_id: Option<String>,
    pub slots: BTreeMap<SlotKind, String>,
    pub toggles: BTreeSet<String>,
    pub has_bed: bool,
    pub has_seats: bool,
    pub owns_van: bool,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn select_chassis(mut self, id: &str) -> Self {
        debug!(chassis = id, "select chassis");
        self.chassis_id = Some(id.to_string());
        self
    }

    /// Picks a layout model and applies its declared baseline.
    ///
    /// Slots with a declared default are overwritten, the bed/seats flags take
    /// the model's values, and the toggle set is left alone.
    #[must_use]
    pub fn select_model(mut self, catalog: &Catalog, id: &str) -> Self {
        debug!(model = id, "select model");
        self.model_id = Some(id.to_string());

        let Some(model) = catalog.model(id) else {
            return self;
        };

        let defaults = &model.defaults;
        for (slot, default) in defaults.slots() {
            let Some(default) = default else { continue };
            if catalog.slot_of(default) == Some(slot) {
                self = self.place_in_slot(catalog, slot, default);
            } else {
                debug!(?slot, id = %default, "skipped model default that does not fit its slot");
            }
        }

        self.has_bed = defaults.has_bed;
        self.has_seats = defaults.has_seats;
        self
    }

    /// Sets an exclusive slot; picking the current holder again clears it.
    #[must_use]
    pub fn set_exclusive_slot(self, catalog: &Catalog, slot: SlotKind, id: &str) -> Self {
        if self.slots.get(&slot).is_some_and(|held| held == id) {
            debug!(?slot, id, "clear slot");
            return self.clear_slot(slot);
        }

        match catalog.lookup(id) {
            Some(item) if item.slot() != Some(slot) => {
                debug!(?slot, id, category = ?item.category, "ignored slot pick that does not fit");
                self
            }
            _ => {
                debug!(?slot, id, "set slot");
                self.place_in_slot(catalog, slot, id)
            }
        }
    }

    #[must_use]
    pub fn clear_slot(mut self, slot: SlotKind) -> Self {
        self.slots.remove(&slot);
        self
    }

    /// Adds or removes an option.
    ///
    /// Exclusive-slot options are routed to their slot with the same
    /// click-again-to-clear behaviour. Chassis and model ids are ignored.
    #[must_use]
    pub fn toggle_option(mut self, catalog: &Catalog, id: &str) -> Self {
        match catalog.lookup(id) {
            Some(item) => {
                if let Some(slot) = item.slot() {
                    return self.set_exclusive_slot(catalog, slot, id);
                }
                if !(item.category.is_toggle() || item.add_on) {
                    debug!(id, category = ?item.category, "ignored toggle of non-option id");
                    return self;
                }
            }
            None => debug!(id, "toggling id unknown to the catalog"),
        }

        if !self.toggles.remove(id) {
            self.toggles.insert(id.to_string());
        }
        self
    }

    #[must_use]
    pub fn set_flag(mut self, flag: Flag, value: bool) -> Self {
        match flag {
            Flag::Bed => self.has_bed = value,
            Flag::Seats => self.has_seats = value,
        }
        self
    }

    #[must_use]
    pub fn set_owns_van(mut self, value: bool) -> Self {
        self.owns_van = value;
        self
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Bed => self.has_bed,
            Flag::Seats => self.has_seats,
        }
    }

    #[must_use]
    pub fn slot(&self, slot: SlotKind) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Whether an id is currently picked anywhere in the state.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.chassis_id.as_deref() == Some(id)
            || self.model_id.as_deref() == Some(id)
            || self.slots.values().any(|held| held == id)
            || self.toggles.contains(id)
    }

    /// Ids that count as upgrades: slot holders plus toggle-set members.
    #[must_use]
    pub fn upgrade_ids(&self) -> BTreeSet<&str> {
        self.slots
            .values()
            .chain(self.toggles.iter())
            .map(String::as_str)
            .collect()
    }

    /// Toggle-set members the catalog files under `category`.
    pub fn toggles_in<'a>(
        &'a self,
        catalog: &'a Catalog,
        category: CategoryId,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.toggles
            .iter()
            .map(String::as_str)
            .filter(move |id| catalog.category_of(id) == Some(category))
    }

    fn place_in_slot(mut self, catalog: &Catalog, slot: SlotKind, id: &str) -> Self {
        self.toggles.retain(|held| catalog.slot_of(held) != Some(slot));
        self.slots.retain(|other, held| *other == slot || held.as_str() != id);
        self.slots.insert(slot, id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogData, CatalogItem, ModelDefaults, ModelSpec};
    use pretty_assertions::assert_eq;

    fn item(id: &str, category: CategoryId, price: u64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            price,
            category,
            visual: None,
            add_on: false,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_data(CatalogData {
            chassis: Vec::new(),
            models: vec![ModelSpec {
                id: "pedernales".to_string(),
                name: "Pedernales".to_string(),
                price: 85000,
                defaults: ModelDefaults {
                    wall_color: Some("wall-white".to_string()),
                    cabinet: Some("cabinet-painted".to_string()),
                    counter: None,
                    has_bed: true,
                    has_seats: true,
                },
                compatible_chassis: Vec::new(),
                dual_cabinet: false,
                dual_counter: false,
                has_table_variant: false,
            }],
            options: vec![
                item("wall-white", CategoryId::WallColor, 0),
                item("wall-finished", CategoryId::WallColor, 1500),
                item("cabinet-painted", CategoryId::Cabinet, 800),
                item("cabinet-white", CategoryId::Cabinet, 0),
                item("countertop-maple", CategoryId::Counter, 900),
                CatalogItem {
                    add_on: true,
                    ..item("kitchen-stove-mounted", CategoryId::Counter, 950)
                },
                item("lighting-accent", CategoryId::Lighting, 450),
                item("electrical-solar", CategoryId::Electrical, 3500),
            ],
        })
        .unwrap()
    }

    #[test]
    fn reselecting_slot_holder_clears_it() {
        let catalog = catalog();
        let state = SelectionState::new()
            .set_exclusive_slot(&catalog, SlotKind::Cabinet, "cabinet-white")
            .set_exclusive_slot(&catalog, SlotKind::Cabinet, "cabinet-white");

        assert_eq!(state.slot(SlotKind::Cabinet), None);
    }

    #[test]
    fn new_slot_pick_evicts_previous_holder() {
        let catalog = catalog();
        let state = SelectionState::new()
            .set_exclusive_slot(&catalog, SlotKind::Cabinet, "cabinet-white")
            .set_exclusive_slot(&catalog, SlotKind::Cabinet, "cabinet-painted");

        assert_eq!(state.slot(SlotKind::Cabinet), Some("cabinet-painted"));
        assert!(!state.is_selected("cabinet-white"));
    }

    #[test]
    fn slot_rejects_ids_from_other_categories() {
        let catalog = catalog();
        let state =
            SelectionState::new().set_exclusive_slot(&catalog, SlotKind::Cabinet, "wall-white");

        assert_eq!(state.slot(SlotKind::Cabinet), None);
    }

    #[test]
    fn toggling_slot_option_routes_to_slot() {
        let catalog = catalog();
        let state = SelectionState::new().toggle_option(&catalog, "countertop-maple");

        assert_eq!(state.slot(SlotKind::Counter), Some("countertop-maple"));
        assert!(state.toggles.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let catalog = catalog();
        let state = SelectionState::new().toggle_option(&catalog, "lighting-accent");
        assert!(state.toggles.contains("lighting-accent"));

        let state = state.toggle_option(&catalog, "lighting-accent");
        assert!(state.toggles.is_empty());
    }

    #[test]
    fn unknown_ids_are_inert_state() {
        let catalog = catalog();
        let state = SelectionState::new().toggle_option(&catalog, "retired-option");

        assert!(state.toggles.contains("retired-option"));
    }

    #[test]
    fn model_ids_never_enter_toggle_set() {
        let catalog = catalog();
        let state = SelectionState::new().toggle_option(&catalog, "pedernales");

        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn select_model_seeds_defaults_and_keeps_toggles() {
        let catalog = catalog();
        let state = SelectionState::new()
            .toggle_option(&catalog, "electrical-solar")
            .set_exclusive_slot(&catalog, SlotKind::Counter, "countertop-maple")
            .set_exclusive_slot(&catalog, SlotKind::WallColor, "wall-finished")
            .select_model(&catalog, "pedernales");

        assert_eq!(state.model_id.as_deref(), Some("pedernales"));
        assert_eq!(state.slot(SlotKind::WallColor), Some("wall-white"));
        assert_eq!(state.slot(SlotKind::Cabinet), Some("cabinet-painted"));
        assert_eq!(state.slot(SlotKind::Counter), Some("countertop-maple"));
        assert!(state.has_bed);
        assert!(state.has_seats);
        assert!(state.toggles.contains("electrical-solar"));
    }

    #[test]
    fn select_model_skips_defaults_that_do_not_fit() {
        let catalog = catalog().with_unchecked_defaults(
            "pedernales",
            ModelDefaults {
                wall_color: Some("wall-white".to_string()),
                cabinet: Some("wall-white".to_string()),
                counter: Some("kitchen-stove-mounted".to_string()),
                ..ModelDefaults::default()
            },
        );

        let state = SelectionState::new()
            .select_chassis("sprinter144")
            .select_model(&catalog, "pedernales");

        assert_eq!(state.slot(SlotKind::WallColor), Some("wall-white"));
        assert_eq!(state.slot(SlotKind::Cabinet), None);
        assert_eq!(state.slot(SlotKind::Counter), None);
        assert!(state.toggles.is_empty());
    }

    #[test]
    fn add_ons_toggle_beside_the_slot_pick() {
        let catalog = catalog();
        let state = SelectionState::new()
            .toggle_option(&catalog, "countertop-maple")
            .toggle_option(&catalog, "kitchen-stove-mounted")
            .set_exclusive_slot(&catalog, SlotKind::Counter, "kitchen-stove-mounted");

        assert_eq!(state.slot(SlotKind::Counter), Some("countertop-maple"));
        assert!(state.toggles.contains("kitchen-stove-mounted"));

        let state = state.toggle_option(&catalog, "kitchen-stove-mounted");
        assert!(state.toggles.is_empty());
    }

    #[test]
    fn select_unknown_model_only_sets_id() {
        let catalog = catalog();
        let state = SelectionState::new()
            .set_flag(Flag::Bed, true)
            .select_model(&catalog, "prototype");

        assert_eq!(state.model_id.as_deref(), Some("prototype"));
        assert!(state.has_bed);
        assert!(state.slots.is_empty());
    }

    #[test]
    fn owns_van_keeps_chassis() {
        let state = SelectionState::new()
            .select_chassis("sprinter144")
            .set_owns_van(true);

        assert!(state.owns_van);
        assert_eq!(state.chassis_id.as_deref(), Some("sprinter144"));
    }

    #[test]
    fn reset_discards_everything() {
        let catalog = catalog();
        let state = SelectionState::new()
            .select_chassis("sprinter144")
            .select_model(&catalog, "pedernales")
            .toggle_option(&catalog, "lighting-accent")
            .reset();

        assert_eq!(state, SelectionState::default());
    }
}
