//! Loads a catalog of books from JSON and answers read-only queries over it.
//!
//! ```no_run
//! use catalog_core::Catalog;
//!
//! let catalog = Catalog::load("books.json")?;
//! for book in catalog.by_category_sorted_asc("Java") {
//!     println!("{} ({} pages)", book.title_or_empty(), book.page_count);
//! }
//! # Ok::<(), catalog_core::CatalogError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
mod loader;
pub mod presets;

pub use config::{CatalogConfig, MissingSource};
pub use data::{book::Book, catalog::Catalog, time::parse_published_date};
pub use error::{CatalogError, Result};
