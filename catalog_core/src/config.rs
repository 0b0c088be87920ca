use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The file a catalog is read from when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "books.json";

/// Where a catalog comes from and how to treat a source that isn't there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub source: PathBuf,
    pub missing_source: MissingSource,
}

/// What to do when the configured source file does not exist.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingSource {
    /// Load an empty catalog.
    #[default]
    Empty,
    /// Fail with an I/O error.
    Fail,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig { source: PathBuf::from(DEFAULT_SOURCE), missing_source: MissingSource::Empty }
    }
}

impl CatalogConfig {
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        CatalogConfig { source: source.into(), ..CatalogConfig::default() }
    }

    /// Reads a configuration from JSON. Any field left out keeps its default.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
