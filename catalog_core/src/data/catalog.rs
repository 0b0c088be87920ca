use std::{cmp::Reverse, io::Read, path::Path};

use chrono::{DateTime, Utc};
use tracing::info;

use super::book::Book;
use crate::{
    config::CatalogConfig,
    error::{CatalogError, Result},
    loader,
};

/// An immutable, in-memory collection of books together with the queries
/// that can be asked of it.
///
/// Records are kept in the order they were loaded, and every query that does
/// not sort explicitly yields them in that order. Nothing can be added to or
/// removed from a catalog once it is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn from_books(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    /// Parses a JSON array of book objects. Field names are matched ignoring
    /// case. A blank document or `null` gives an empty catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let books = loader::parse_books(json)?;
        info!(records = books.len(), "parsed catalog");
        Ok(Catalog { books })
    }

    /// Reads the whole of `reader` and parses it like
    /// [`Catalog::from_json_str`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|source| CatalogError::ReadInput { source })?;
        Catalog::from_json_str(&json)
    }

    /// Loads the catalog stored at `path`. A file that doesn't exist gives an
    /// empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Catalog::open(&CatalogConfig::with_source(path.as_ref()))
    }

    /// Loads the catalog described by `config`.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        Ok(Catalog { books: loader::read_books(config)? })
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Every record, in load order.
    pub fn all(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    /// Records published in a year strictly after `year`.
    pub fn published_after_year(&self, year: i32) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |book| book.year() > year)
    }

    /// Records with more than `min_pages` pages whose title contains
    /// `substring`. A missing title is treated as empty, so it only matches
    /// the empty substring.
    pub fn long_books_titled<'a>(
        &'a self,
        substring: &'a str,
        min_pages: i32,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        self.books
            .iter()
            .filter(move |book| book.page_count > min_pages && book.title_or_empty().contains(substring))
    }

    /// Records whose status is not the empty string.
    pub fn with_status(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(|book| book.has_status())
    }

    /// Whether every record has a non-empty status. True for an empty catalog.
    pub fn all_have_status(&self) -> bool {
        self.books.iter().all(Book::has_status)
    }

    /// Whether at least one record was published in `year`. False for an
    /// empty catalog.
    pub fn any_published_in_year(&self, year: i32) -> bool {
        self.books.iter().any(|book| book.year() == year)
    }

    /// Records tagged with `tag`, in load order.
    pub fn by_category<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.books.iter().filter(move |book| book.has_category(tag))
    }

    /// Records tagged with `tag`, ordered by title. Titles are compared
    /// ignoring case first, so "iBATIS" sorts among the I titles, and only
    /// titles equal up to case fall back to a byte-wise comparison. Books
    /// without a title come first. The sort is stable.
    pub fn by_category_sorted_asc<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        let mut books = self.by_category(tag).collect::<Vec<_>>();
        books.sort_by_cached_key(|book| book.title_sort_key());
        books.into_iter()
    }

    /// Records with more than `min_pages` pages, longest first. Books with the
    /// same page count keep their load order.
    pub fn above_page_count_sorted_desc(&self, min_pages: i32) -> impl Iterator<Item = &Book> + '_ {
        let mut books = self.books.iter().filter(|book| book.page_count > min_pages).collect::<Vec<_>>();
        books.sort_by_key(|book| Reverse(book.page_count));
        books.into_iter()
    }

    /// The `n` most recently published records tagged with `tag`, newest
    /// first.
    pub fn top_n_by_category_recent_first<'a>(
        &'a self,
        tag: &'a str,
        n: usize,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        let mut books = self.by_category(tag).collect::<Vec<_>>();
        books.sort_by_key(|book| Reverse(book.published_date));
        books.into_iter().take(n)
    }

    /// The `n` most recently published records tagged with `tag`, oldest
    /// first. This is the tail of the category sorted by ascending date, so
    /// among equal dates the later-loaded books are the ones kept.
    pub fn last_n_by_category_oldest_first<'a>(
        &'a self,
        tag: &'a str,
        n: usize,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        let mut books = self.by_category(tag).collect::<Vec<_>>();
        books.sort_by_key(|book| book.published_date);
        let start = books.len().saturating_sub(n);
        books.split_off(start).into_iter()
    }

    /// Of the records with more than `min_pages` pages, takes the first `take`
    /// in load order and then drops the first `skip` of those. The take
    /// happens before the skip: `(400, 4, 2)` yields the third and fourth
    /// matching records, never more than `take - skip` of them.
    pub fn page_count_range_window(
        &self,
        min_pages: i32,
        take: usize,
        skip: usize,
    ) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |book| book.page_count > min_pages).take(take).skip(skip)
    }

    /// The first `n` records reduced to their title and page count. Every
    /// other field of the yielded books holds its default value.
    pub fn project_first_n(&self, n: usize) -> impl Iterator<Item = Book> + '_ {
        self.books.iter().take(n).map(Book::title_and_pages)
    }

    /// How many records have between `lo` and `hi` pages, both inclusive.
    pub fn count_in_page_range(&self, lo: i32, hi: i32) -> usize {
        self.in_page_range(lo, hi).count()
    }

    /// Same as [`Catalog::count_in_page_range`], but counted in 64 bits
    /// regardless of the platform's pointer width.
    pub fn long_count_in_page_range(&self, lo: i32, hi: i32) -> u64 {
        self.in_page_range(lo, hi).fold(0, |count, _| count + 1)
    }

    fn in_page_range(&self, lo: i32, hi: i32) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(move |book| (lo..=hi).contains(&book.page_count))
    }

    /// The earliest published date in the catalog. Fails with
    /// [`CatalogError::EmptyCollection`] if there are no records.
    pub fn earliest_published_date(&self) -> Result<DateTime<Utc>> {
        self.books.iter().map(|book| book.published_date).min().ok_or(CatalogError::EmptyCollection)
    }

    /// The latest published date in the catalog. Fails with
    /// [`CatalogError::EmptyCollection`] if there are no records.
    pub fn latest_published_date(&self) -> Result<DateTime<Utc>> {
        self.books.iter().map(|book| book.published_date).max().ok_or(CatalogError::EmptyCollection)
    }

    /// Every record published on the earliest date in the catalog, in load
    /// order. Yields nothing for an empty catalog.
    pub fn records_at_earliest_date(&self) -> impl Iterator<Item = &Book> + '_ {
        let earliest = self.earliest_published_date().ok();
        self.books.iter().filter(move |book| Some(book.published_date) == earliest)
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Catalog::from_books(books)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
