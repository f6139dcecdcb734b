//! # Van Configurator
//!
//! Pick a chassis, a layout package and add-ons for a camper van, and see the
//! price, the layered preview stack and completion progress update as you go.
//!
//! ## Features
//!
//! - Catalog of chassis, layout packages and options (built-in or JSON)
//! - Category gating: chassis first, then the package, then everything else
//! - Price breakdown with customer-supplied van support
//! - Ordered image layer stack per chassis and package
//! - Summary export to CSV and JSON, and submission to a form endpoint
//!
//! ## Example
//!
//! ```no_run
//! use van_configurator::configurator::Configurator;
//! use van_configurator::loader::{builtin_assets, builtin_catalog};
//!
//! let mut van = Configurator::new(builtin_catalog()?, builtin_assets()?);
//! van.select("sprinter170");
//! van.select("rio-grande");
//! println!("Total: {}", van.price().total);
//! println!("Layers: {}", van.layers().len());
//! # Ok::<(), van_configurator::error::CatalogError>(())
//! ```

pub mod config;
pub mod configurator;
pub mod error;
pub mod export;
pub mod gate;
pub mod layers;
pub mod loader;
pub mod logging;
pub mod model;
pub mod pricing;
pub mod progress;
pub mod submit;
pub mod summary;
pub mod ui;
