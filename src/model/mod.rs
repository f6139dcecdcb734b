pub mod assets;
pub mod catalog;
pub mod category;
pub mod selection;

pub use assets::{AssetData, AssetEntry, AssetKey, AssetSet, AssetTable, VariantImages};
pub use catalog::{Catalog, CatalogData, CatalogItem, ChassisSpec, ModelDefaults, ModelSpec};
pub use category::{CategoryId, SlotKind};
pub use selection::{Flag, SelectionState};
