//! Resolves the image stack for the visual preview.
//!
//! Every layer has a fixed place in one total order, so compositing the
//! returned list front to back is correct whichever optional layers are
//! present. A chassis/model pair missing from the asset table yields an empty
//! stack and the caller shows its placeholder.

use crate::model::{AssetTable, Catalog, SelectionState, SlotKind, VariantImages};
use serde::Serialize;

/// Layer positions, lowest first. The discriminant is the z-index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerSlot {
    Floor = 0,
    Wall = 1,
    BackCabinet = 2,
    /// Single cabinet, or the front piece of a split one.
    Cabinet = 3,
    BackCounter = 4,
    BenchCushion = 5,
    Table = 6,
    /// Single counter, or the front piece of a split one.
    Counter = 7,
    Bed = 8,
    Seats = 9,
}

impl LayerSlot {
    #[must_use]
    pub fn z_index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LayerSlot::Floor => "Floor",
            LayerSlot::Wall => "Walls",
            LayerSlot::BackCabinet => "Back cabinet",
            LayerSlot::Cabinet => "Cabinet",
            LayerSlot::BackCounter => "Back counter",
            LayerSlot::BenchCushion => "Bench cushion",
            LayerSlot::Table => "Table",
            LayerSlot::Counter => "Counter",
            LayerSlot::Bed => "Bed",
            LayerSlot::Seats => "Seats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub slot: LayerSlot,
    pub image: String,
}

impl Layer {
    #[must_use]
    pub fn z_index(&self) -> u8 {
        self.slot.z_index()
    }
}

/// Everything the resolver needs, already reduced to asset keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerQuery {
    pub chassis_size: String,
    pub model_id: String,
    pub wall: Option<String>,
    pub cabinet: Option<String>,
    pub counter: Option<String>,
    pub has_bed: bool,
    pub has_seats: bool,
}

impl LayerQuery {
    /// Builds a query from a selection; `None` until both chassis and model are picked.
    ///
    /// Slot picks map to their catalog `visual` variant. Picks without one
    /// (or unknown to the catalog) resolve no layer.
    #[must_use]
    pub fn from_state(state: &SelectionState, catalog: &Catalog) -> Option<Self> {
        let chassis_id = state.chassis_id.as_deref()?;
        let model_id = state.model_id.as_deref()?;

        let chassis_size = catalog
            .chassis(chassis_id)
            .map_or(chassis_id, |c| c.size())
            .to_string();

        let visual = |slot: SlotKind| {
            state
                .slot(slot)
                .and_then(|id| catalog.lookup(id))
                .and_then(|item| item.visual.clone())
        };

        Some(Self {
            chassis_size,
            model_id: model_id.to_string(),
            wall: visual(SlotKind::WallColor),
            cabinet: visual(SlotKind::Cabinet),
            counter: visual(SlotKind::Counter),
            has_bed: state.has_bed,
            has_seats: state.has_seats,
        })
    }
}

/// Resolves the ordered layer stack for a query, lowest z first.
#[must_use]
pub fn resolve_layers(query: &LayerQuery, catalog: &Catalog, assets: &AssetTable) -> Vec<Layer> {
    let Some(set) = assets.lookup(&query.chassis_size, &query.model_id) else {
        return Vec::new();
    };
    if set.floor.is_empty() {
        return Vec::new();
    }

    let model = catalog.model(&query.model_id);
    let split_cabinet = model.is_some_and(|m| m.dual_cabinet)
        || assets.splits_cabinets(&query.chassis_size, &query.model_id);
    let split_counter = model.is_some_and(|m| m.dual_counter)
        || assets.splits_counters(&query.chassis_size, &query.model_id);
    let has_table = model.is_some_and(|m| m.has_table_variant);

    let mut stack = LayerStack::default();
    stack.push(LayerSlot::Floor, Some(&set.floor));
    stack.push(LayerSlot::Wall, variant(&set.wall, query.wall.as_deref()));

    let cabinet = query.cabinet.as_deref();
    if split_cabinet {
        stack.push(LayerSlot::BackCabinet, variant(&set.back_cabinet, cabinet));
        stack.push(LayerSlot::Cabinet, variant(&set.front_cabinet, cabinet));
    } else {
        stack.push(LayerSlot::Cabinet, variant(&set.cabinet, cabinet));
    }

    let counter = query.counter.as_deref();
    if split_counter {
        stack.push(LayerSlot::BackCounter, variant(&set.back_counter, counter));
        stack.push(LayerSlot::Counter, variant(&set.front_counter, counter));
    } else {
        stack.push(LayerSlot::Counter, variant(&set.counter, counter));
    }

    if query.has_bed {
        stack.push(LayerSlot::Bed, set.bed.as_ref());
    } else if has_table {
        stack.push(LayerSlot::BenchCushion, set.bench_cushion.as_ref());
        stack.push(LayerSlot::Table, variant(&set.table, counter));
    }

    if query.has_seats {
        stack.push(LayerSlot::Seats, set.seats.as_ref());
    }

    stack.finish()
}

/// Convenience wrapper resolving straight from a selection.
#[must_use]
pub fn layers_for(state: &SelectionState, catalog: &Catalog, assets: &AssetTable) -> Vec<Layer> {
    LayerQuery::from_state(state, catalog)
        .map(|query| resolve_layers(&query, catalog, assets))
        .unwrap_or_default()
}

fn variant<'a>(images: &'a VariantImages, choice: Option<&str>) -> Option<&'a String> {
    choice.and_then(|name| images.get(name))
}

#[derive(Default)]
struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    fn push(&mut self, slot: LayerSlot, image: Option<&String>) {
        if let Some(image) = image.filter(|i| !i.is_empty()) {
            self.layers.push(Layer {
                slot,
                image: image.clone(),
            });
        }
    }

    fn finish(mut self) -> Vec<Layer> {
        self.layers.sort_by_key(|layer| layer.slot);
        self.layers
    }
}
