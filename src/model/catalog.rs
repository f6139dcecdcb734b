use super::{CategoryId, SlotKind};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selectable entry, whatever table it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: CategoryId,
    /// Asset variant this option selects (e.g. `maple`), for exclusive-slot options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
    /// Combines freely with other picks even inside an exclusive category
    /// (a stove next to the chosen countertop).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub add_on: bool,
}

impl CatalogItem {
    /// Exclusive slot this entry occupies, if any.
    #[must_use]
    pub fn slot(&self) -> Option<SlotKind> {
        if self.add_on {
            None
        } else {
            self.category.slot()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChassisSpec {
    pub id: String,
    pub name: String,
    pub price: u64,
    /// Key into the asset table; defaults to the id.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub compatible_models: Vec<String>,
}

impl ChassisSpec {
    #[must_use]
    pub fn size(&self) -> &str {
        self.size.as_deref().unwrap_or(&self.id)
    }
}

/// Baseline a layout model applies when it is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDefaults {
    pub wall_color: Option<String>,
    pub cabinet: Option<String>,
    pub counter: Option<String>,
    pub has_bed: bool,
    pub has_seats: bool,
}

impl ModelDefaults {
    /// Declared slot defaults, in slot order.
    #[must_use]
    pub fn slots(&self) -> [(SlotKind, &Option<String>); 3] {
        [
            (SlotKind::WallColor, &self.wall_color),
            (SlotKind::Cabinet, &self.cabinet),
            (SlotKind::Counter, &self.counter),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: String,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub defaults: ModelDefaults,
    #[serde(default)]
    pub compatible_chassis: Vec<String>,
    /// Cabinets render as separate front and back pieces.
    #[serde(default)]
    pub dual_cabinet: bool,
    /// Counters render as separate front and back pieces.
    #[serde(default)]
    pub dual_counter: bool,
    /// Without a bed, the layout shows a table and bench cushion.
    #[serde(default)]
    pub has_table_variant: bool,
}

/// Serialized form of a catalog, as supplied by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub chassis: Vec<ChassisSpec>,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
    #[serde(default)]
    pub options: Vec<CatalogItem>,
}

/// Read-only catalog with a global id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    chassis: Vec<ChassisSpec>,
    models: Vec<ModelSpec>,
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog, rejecting ids that are not globally unique.
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let CatalogData {
            chassis,
            models,
            options,
        } = data;

        let mut items = Vec::with_capacity(chassis.len() + models.len() + options.len());

        items.extend(chassis.iter().map(|c| CatalogItem {
            id: c.id.clone(),
            name: c.name.clone(),
            price: c.price,
            category: CategoryId::Chassis,
            visual: None,
            add_on: false,
        }));
        items.extend(models.iter().map(|m| CatalogItem {
            id: m.id.clone(),
            name: m.name.clone(),
            price: m.price,
            category: CategoryId::Model,
            visual: None,
            add_on: false,
        }));

        for option in options {
            if matches!(option.category, CategoryId::Chassis | CategoryId::Model) {
                return Err(CatalogError::MisplacedCategory {
                    id: option.id,
                    category: option.category,
                });
            }
            items.push(option);
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        for model in &models {
            for (slot, default) in model.defaults.slots() {
                let Some(id) = default else { continue };
                let fits = index
                    .get(id)
                    .is_some_and(|&position| items[position].slot() == Some(slot));
                if !fits {
                    return Err(CatalogError::MisplacedDefault {
                        model: model.id.clone(),
                        slot,
                        id: id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            chassis,
            models,
            items,
            index,
        })
    }

    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<CategoryId> {
        self.lookup(id).map(|item| item.category)
    }

    /// Exclusive slot a known id occupies. Add-ons and toggle options have none.
    #[must_use]
    pub fn slot_of(&self, id: &str) -> Option<SlotKind> {
        self.lookup(id).and_then(CatalogItem::slot)
    }

    /// Price of an id, zero when the id is unknown.
    #[must_use]
    pub fn price_of(&self, id: &str) -> u64 {
        self.lookup(id).map_or(0, |item| item.price)
    }

    #[must_use]
    pub fn chassis(&self, id: &str) -> Option<&ChassisSpec> {
        self.chassis.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn model(&self, id: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn all_chassis(&self) -> &[ChassisSpec] {
        &self.chassis
    }

    #[must_use]
    pub fn all_models(&self) -> &[ModelSpec] {
        &self.models
    }

    /// Models usable on a chassis. Either side may declare the pairing.
    #[must_use]
    pub fn models_for_chassis(&self, chassis_id: &str) -> Vec<&ModelSpec> {
        let listed = self
            .chassis(chassis_id)
            .map(|c| c.compatible_models.as_slice())
            .unwrap_or_default();

        self.models
            .iter()
            .filter(|m| {
                m.compatible_chassis.iter().any(|c| c == chassis_id)
                    || listed.iter().any(|id| *id == m.id)
            })
            .collect()
    }

    /// Entries of a category in catalog order.
    #[must_use]
    pub fn options_in(&self, category: CategoryId) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

#[cfg(test)]
impl Catalog {
    /// Replaces a model's defaults without validation.
    pub(crate) fn with_unchecked_defaults(mut self, model_id: &str, defaults: ModelDefaults) -> Self {
        if let Some(model) = self.models.iter_mut().find(|m| m.id == model_id) {
            model.defaults = defaults;
        }
        self
    }
}
