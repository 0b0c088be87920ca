use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source document is not valid JSON, or does not have the shape of
    /// an array of book objects.
    #[error("malformed catalog input: {source}")]
    MalformedInput {
        #[from]
        source: serde_json::Error,
    },
    /// A published date was in none of the accepted formats.
    #[error("invalid published date {value:?}")]
    InvalidDate { value: String },
    /// An aggregate that needs at least one record was asked of an empty
    /// catalog.
    #[error("the catalog holds no records")]
    EmptyCollection,
    /// Reading a catalog from a caller-supplied reader failed.
    #[error("could not read catalog input: {source}")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },
    #[error("could not read catalog source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
