use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Variant name → image reference.
pub type VariantImages = BTreeMap<String, String>;

/// Named image slots for one chassis/model pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSet {
    pub floor: String,
    pub wall: VariantImages,
    pub cabinet: VariantImages,
    pub front_cabinet: VariantImages,
    pub back_cabinet: VariantImages,
    pub counter: VariantImages,
    pub front_counter: VariantImages,
    pub back_counter: VariantImages,
    pub table: VariantImages,
    pub bench_cushion: Option<String>,
    pub bed: Option<String>,
    pub seats: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey {
    pub chassis: String,
    pub model: String,
}

impl AssetKey {
    #[must_use]
    pub fn new(chassis: &str, model: &str) -> Self {
        Self {
            chassis: chassis.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEntry {
    pub chassis: String,
    pub model: String,
    #[serde(flatten)]
    pub images: AssetSet,
}

/// Serialized form of the asset table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetData {
    pub entries: Vec<AssetEntry>,
    /// Pairs that split cabinets even when the model does not declare it.
    pub split_cabinets: Vec<AssetKey>,
    /// Pairs that split counters even when the model does not declare it.
    pub split_counters: Vec<AssetKey>,
}

/// Image assets keyed by `(chassis size, model id)`.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    sets: HashMap<AssetKey, AssetSet>,
    split_cabinets: HashSet<AssetKey>,
    split_counters: HashSet<AssetKey>,
}

impl AssetTable {
    pub fn from_data(data: AssetData) -> Result<Self, CatalogError> {
        let mut sets = HashMap::with_capacity(data.entries.len());
        for entry in data.entries {
            let key = AssetKey {
                chassis: entry.chassis,
                model: entry.model,
            };
            if sets.contains_key(&key) {
                return Err(CatalogError::DuplicateAsset {
                    chassis: key.chassis,
                    model: key.model,
                });
            }
            sets.insert(key, entry.images);
        }

        Ok(Self {
            sets,
            split_cabinets: data.split_cabinets.into_iter().collect(),
            split_counters: data.split_counters.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn lookup(&self, chassis: &str, model: &str) -> Option<&AssetSet> {
        self.sets.get(&AssetKey::new(chassis, model))
    }

    #[must_use]
    pub fn splits_cabinets(&self, chassis: &str, model: &str) -> bool {
        self.split_cabinets.contains(&AssetKey::new(chassis, model))
    }

    #[must_use]
    pub fn splits_counters(&self, chassis: &str, model: &str) -> bool {
        self.split_counters.contains(&AssetKey::new(chassis, model))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
