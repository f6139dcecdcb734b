//! Loads catalog and asset tables from JSON.

use crate::error::CatalogError;
use crate::model::{AssetData, AssetTable, Catalog, CatalogData};
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");
const BUILTIN_ASSETS: &str = include_str!("../data/assets.json");

/// Parses a catalog document and validates its ids.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let data: CatalogData = serde_json::from_str(content)?;
    Catalog::from_data(data)
}

pub fn parse_assets(content: &str) -> Result<AssetTable, CatalogError> {
    let data: AssetData = serde_json::from_str(content)?;
    AssetTable::from_data(data)
}

/// Reads a catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::FileRead`] if the file cannot be read, and the
/// parse/validation variants if its content is rejected.
///
/// # Example
///
/// ```no_run
/// use van_configurator::loader::load_catalog;
///
/// let catalog = load_catalog("catalog.json")?;
/// println!("{} models", catalog.all_models().len());
/// # Ok::<(), van_configurator::error::CatalogError>(())
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let content = read(path.as_ref())?;
    let catalog = parse_catalog(&content)?;
    info!(
        path = %path.as_ref().display(),
        chassis = catalog.all_chassis().len(),
        models = catalog.all_models().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

pub fn load_assets<P: AsRef<Path>>(path: P) -> Result<AssetTable, CatalogError> {
    let content = read(path.as_ref())?;
    let assets = parse_assets(&content)?;
    info!(path = %path.as_ref().display(), pairs = assets.len(), "loaded asset table");
    Ok(assets)
}

/// The catalog shipped with the binary.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUILTIN_CATALOG)
}

pub fn builtin_assets() -> Result<AssetTable, CatalogError> {
    parse_assets(BUILTIN_ASSETS)
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
