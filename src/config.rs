//! Settings file.
//!
//! ```toml
//! catalog = "/srv/vans/catalog.json"
//! assets = "/srv/vans/assets.json"
//!
//! [submission]
//! endpoint = "https://api.web3forms.com/submit"
//! access_key = "..."
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/van-configurator.log"
//! ```

use crate::error::ConfigError;
use crate::submit::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

const APP_DIR: &str = "van-configurator";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog JSON; the built-in catalog when absent.
    pub catalog: Option<PathBuf>,
    /// Asset table JSON; the built-in table when absent.
    pub assets: Option<PathBuf>,
    pub submission: SubmissionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmissionSettings {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl Settings {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// An explicit path must exist. Otherwise the per-user file is used
    /// when present, and defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.submission
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Configured log level, if any.
    pub fn log_level(&self) -> Result<Option<Level>, ConfigError> {
        self.logging
            .level
            .as_deref()
            .map(|value| {
                value.parse::<Level>().map_err(|_| ConfigError::InvalidLevel {
                    value: value.to_string(),
                })
            })
            .transpose()
    }
}

/// `<config dir>/van-configurator/config.toml`
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_defaults() {
        let settings = Settings::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(settings.log_level().unwrap(), None);
    }

    #[test]
    fn reads_all_sections() {
        let text = r#"
            catalog = "vans/catalog.json"

            [submission]
            endpoint = "http://localhost:9000/submit"
            access_key = "abc"

            [logging]
            level = "debug"
            file = "van.log"
        "#;
        let settings = Settings::parse(text, Path::new("config.toml")).unwrap();

        assert_eq!(settings.catalog, Some(PathBuf::from("vans/catalog.json")));
        assert_eq!(settings.assets, None);
        assert_eq!(settings.endpoint(), "http://localhost:9000/submit");
        assert_eq!(settings.submission.access_key.as_deref(), Some("abc"));
        assert_eq!(settings.log_level().unwrap(), Some(Level::DEBUG));
        assert_eq!(settings.logging.file, Some(PathBuf::from("van.log")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::parse("colour = \"red\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bad_level_is_reported() {
        let settings = Settings::parse("[logging]\nlevel = \"loud\"", Path::new("c.toml")).unwrap();
        assert!(matches!(
            settings.log_level(),
            Err(ConfigError::InvalidLevel { value }) if value == "loud"
        ));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = Settings::load(Some(Path::new("/nonexistent/van.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
