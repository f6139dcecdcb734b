//! Error types for the van configurator.

use crate::model::{CategoryId, SlotKind};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading catalog or asset data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a data file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON document does not match the expected shape.
    #[error("invalid catalog data: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// An id is used by more than one catalog entry.
    #[error("duplicate catalog id '{id}'")]
    DuplicateId { id: String },

    /// An option entry claims a category that has its own table.
    #[error("option '{id}' cannot use category '{category:?}'")]
    MisplacedCategory { id: String, category: CategoryId },

    /// A model default names an id that cannot fill that slot.
    #[error("model '{model}' default '{id}' does not fit slot '{slot:?}'")]
    MisplacedDefault {
        model: String,
        slot: SlotKind,
        id: String,
    },

    /// The asset table lists the same chassis/model pair twice.
    #[error("duplicate asset entry for '{chassis}' / '{model}'")]
    DuplicateAsset { chassis: String, model: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when sending a configuration summary.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// No access key was configured for the form endpoint.
    #[error("submission endpoint is not configured")]
    NotConfigured,

    /// The request could not be sent or the reply could not be read.
    #[error("submission request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("submission endpoint returned status {status}")]
    Status { status: u16 },
}

/// Errors that can occur when loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("failed to read config '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::config::Settings`].
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// `[logging] level` is not a tracing level name.
    #[error("unknown log level '{value}'")]
    InvalidLevel { value: String },
}
