#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Where the subject catalog comes from and how strictly it is loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBJECTS_FILE, STRICT_CATALOG_ENV, SUBJECTS_FILE_ENV};

/// What to do when the subject file does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSource {
    /// Treat the catalog as empty; students built on it accept no subjects.
    #[default]
    Empty,
    /// Fail the load with `CatalogError::Missing`.
    Error,
}

/// Parses a boolean-ish environment value, `None` when unset or unrecognised.
fn parse_flag(val: Option<String>) -> Option<bool> {
    match val?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Location and load policy of the subject catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Comma separated file whose first record lists the subjects.
    path:           PathBuf,
    /// Policy applied when `path` does not exist.
    #[serde(default)]
    missing_source: MissingSource,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path:           PathBuf::from(DEFAULT_SUBJECTS_FILE),
            missing_source: MissingSource::default(),
        }
    }
}

impl CatalogConfig {
    /// Creates a config for `path` with the default missing-file policy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Reads `GRADEBOOK_SUBJECTS_FILE` and `GRADEBOOK_STRICT_CATALOG`, falling
    /// back to defaults for anything unset or blank.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = std::env::var(SUBJECTS_FILE_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
        {
            config.path = PathBuf::from(path.trim());
        }

        if let Some(strict) = parse_flag(std::env::var(STRICT_CATALOG_ENV).ok()) {
            config.missing_source = if strict {
                MissingSource::Error
            } else {
                MissingSource::Empty
            };
        }

        config
    }

    /// Subject file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Policy applied when the subject file is missing.
    pub fn missing_source(&self) -> MissingSource {
        self.missing_source
    }

    /// Returns a copy of this config pointing at another file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns a copy of this config with another missing-file policy.
    pub fn with_missing_source(mut self, missing_source: MissingSource) -> Self {
        self.missing_source = missing_source;
        self
    }
}

/// Configuration bundle for the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Subject catalog settings.
    #[serde(default)]
    catalog: CatalogConfig,
}

impl GradebookConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
        }
    }

    /// Subject catalog settings.
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Returns a copy of this config with other catalog settings.
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }
}
