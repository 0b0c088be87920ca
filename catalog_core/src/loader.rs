use std::{fs, io, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    config::{CatalogConfig, MissingSource},
    data::book::Book,
    error::{CatalogError, Result},
};

/// The field names of a serialized [`Book`], as they are spelled on the Rust
/// side. Source keys are matched against these ignoring case.
const BOOK_FIELDS: [&str; 5] = ["title", "pageCount", "publishedDate", "status", "categories"];

/// Parses a catalog document into its records. A blank document or a
/// top-level `null` is an empty catalog.
pub(crate) fn parse_books(json: &str) -> Result<Vec<Book>> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    if json.trim().is_empty() {
        debug!("catalog source is blank");
        return Ok(Vec::new());
    }

    let Some(items) = serde_json::from_str::<Option<Vec<Value>>>(json)? else {
        debug!("catalog source is null");
        return Ok(Vec::new());
    };

    let items = items.into_iter().map(canonicalize_keys).collect();
    Ok(serde_json::from_value(Value::Array(items))?)
}

/// Renames the keys of a book object to their canonical spelling, so that
/// `PageCount` and `pagecount` both bind `pageCount`. Keys that aren't book
/// fields are left alone and later ignored. Anything other than an object is
/// passed through untouched for deserialization to reject.
fn canonicalize_keys(item: Value) -> Value {
    let Value::Object(fields) = item else {
        return item;
    };
    let fields = fields
        .into_iter()
        .map(|(key, value)| {
            let canonical = BOOK_FIELDS.iter().find(|field| field.eq_ignore_ascii_case(&key));
            match canonical {
                Some(field) => ((*field).to_owned(), value),
                None => (key, value),
            }
        })
        .collect::<Map<_, _>>();
    Value::Object(fields)
}

/// Reads and parses the configured source.
pub(crate) fn read_books(config: &CatalogConfig) -> Result<Vec<Book>> {
    let path = config.source.as_path();
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return match config.missing_source {
                MissingSource::Empty => {
                    warn!(path = %path.display(), "catalog source not found, starting empty");
                    Ok(Vec::new())
                }
                MissingSource::Fail => Err(io_error(path, err)),
            };
        }
        Err(err) => return Err(io_error(path, err)),
    };

    let books = parse_books(&json)?;
    info!(path = %path.display(), records = books.len(), "loaded catalog");
    Ok(books)
}

fn io_error(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::Io { path: path.to_owned(), source }
}
