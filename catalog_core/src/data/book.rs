use chrono::{DateTime, Datelike as _, Utc};
use serde::{Deserialize, Serialize};

use super::time::{default_published_date, deserialize_published_date};

/// A single catalog record. Every field may be missing from the source, in
/// which case it takes its default value; nothing about the record is
/// validated.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub page_count: i32,
    /// When the book was published. Most queries only look at the year.
    #[serde(default = "default_published_date", deserialize_with = "deserialize_published_date")]
    pub published_date: DateTime<Utc>,
    /// The publication status, e.g. "PUBLISH". Only an empty string means
    /// "no status"; a missing status is not the same thing.
    #[serde(default)]
    pub status: Option<String>,
    /// Subject tags in source order, e.g. "Java" or "Internet".
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl Default for Book {
    fn default() -> Self {
        Book {
            title: None,
            page_count: 0,
            published_date: default_published_date(),
            status: None,
            categories: None,
        }
    }
}

impl Book {
    /// The title, or the empty string if there is none.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// The year of the published date, in UTC.
    pub fn year(&self) -> i32 {
        self.published_date.year()
    }

    /// The categories, or nothing if there are none.
    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }

    /// Whether `tag` is one of this book's categories. Matching is exact.
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories().iter().any(|category| category == tag)
    }

    /// Whether the status is anything other than the empty string. A book
    /// without a status at all counts as having one.
    pub fn has_status(&self) -> bool {
        self.status.as_deref() != Some("")
    }

    /// Orders titles case-insensitively, breaking ties between titles that
    /// differ only in case byte-wise. A missing title sorts before any title.
    pub fn title_sort_key(&self) -> Option<(String, String)> {
        self.title.as_ref().map(|title| (title.to_lowercase(), title.clone()))
    }

    /// A copy holding only the title and page count; every other field is
    /// left at its default.
    pub fn title_and_pages(&self) -> Book {
        Book { title: self.title.clone(), page_count: self.page_count, ..Book::default() }
    }
}
