//! Canned queries for the usual book listing reports, with their thresholds
//! spelled out once.

use crate::data::{book::Book, catalog::Catalog};

pub const MODERN_ERA_AFTER_YEAR: i32 = 2000;
pub const IN_ACTION_TITLE: &str = "in Action";
pub const IN_ACTION_MIN_PAGES: i32 = 250;
pub const CHECKED_PUBLICATION_YEAR: i32 = 2005;
pub const PYTHON: &str = "Python";
pub const JAVA: &str = "Java";
pub const THICK_BOOK_MIN_PAGES: i32 = 450;
pub const SHORTLIST_LEN: usize = 3;
pub const WINDOW_MIN_PAGES: i32 = 400;
pub const WINDOW_TAKE: usize = 4;
pub const WINDOW_SKIP: usize = 2;
pub const MID_LENGTH_PAGES: (i32, i32) = (200, 500);

impl Catalog {
    /// Books published after 2000.
    pub fn books_after_2000(&self) -> impl Iterator<Item = &Book> + '_ {
        self.published_after_year(MODERN_ERA_AFTER_YEAR)
    }

    /// "... in Action" books with more than 250 pages.
    pub fn in_action_books_over_250_pages(&self) -> impl Iterator<Item = &Book> + '_ {
        self.long_books_titled(IN_ACTION_TITLE, IN_ACTION_MIN_PAGES)
    }

    pub fn any_published_in_2005(&self) -> bool {
        self.any_published_in_year(CHECKED_PUBLICATION_YEAR)
    }

    pub fn python_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.by_category(PYTHON)
    }

    pub fn java_books_by_title(&self) -> impl Iterator<Item = &Book> + '_ {
        self.by_category_sorted_asc(JAVA)
    }

    /// Books with more than 450 pages, longest first.
    pub fn books_over_450_pages_longest_first(&self) -> impl Iterator<Item = &Book> + '_ {
        self.above_page_count_sorted_desc(THICK_BOOK_MIN_PAGES)
    }

    pub fn three_newest_java_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.top_n_by_category_recent_first(JAVA, SHORTLIST_LEN)
    }

    pub fn three_newest_java_books_oldest_first(&self) -> impl Iterator<Item = &Book> + '_ {
        self.last_n_by_category_oldest_first(JAVA, SHORTLIST_LEN)
    }

    /// The third and fourth books with more than 400 pages.
    pub fn third_and_fourth_over_400_pages(&self) -> impl Iterator<Item = &Book> + '_ {
        self.page_count_range_window(WINDOW_MIN_PAGES, WINDOW_TAKE, WINDOW_SKIP)
    }

    pub fn first_three_titles_and_pages(&self) -> impl Iterator<Item = Book> + '_ {
        self.project_first_n(SHORTLIST_LEN)
    }

    pub fn count_200_to_500_pages(&self) -> usize {
        let (lo, hi) = MID_LENGTH_PAGES;
        self.count_in_page_range(lo, hi)
    }

    pub fn long_count_200_to_500_pages(&self) -> u64 {
        let (lo, hi) = MID_LENGTH_PAGES;
        self.long_count_in_page_range(lo, hi)
    }
}
