//! Read-year grouping and distinct-value helpers for the catalog view.

use lektyr_core::types::Book;

/// One shelf section: a read year plus the books read that year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    /// The year these books were read.
    pub year: i32,
    /// Books read that year, in the order they arrived (i.e. sorted order).
    pub books: Vec<&'a Book>,
}

/// Groups books by read year, newest year first.
///
/// Within a group, books keep their incoming order, so callers sort
/// first and group second. An empty input yields no groups.
pub fn group_by_read_year<'a>(books: &[&'a Book]) -> Vec<YearGroup<'a>> {
    let mut years: Vec<i32> = books.iter().map(|b| b.read_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    years
        .into_iter()
        .map(|year| YearGroup {
            year,
            books: books
                .iter()
                .copied()
                .filter(|b| b.read_year == year)
                .collect(),
        })
        .collect()
}

/// Distinct read years across the catalog, newest first.
///
/// The candidate values for a read-year filter.
pub fn unique_read_years(books: &[Book]) -> Vec<i32> {
    let mut years: Vec<i32> = books.iter().map(|b| b.read_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Distinct genres across the catalog, ascending.
///
/// Blank genres show up under "Uncategorized".
pub fn unique_genres(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = books
        .iter()
        .map(|b| {
            if b.genre.trim().is_empty() {
                lektyr_core::types::DEFAULT_GENRE.to_string()
            } else {
                b.genre.clone()
            }
        })
        .collect();
    genres.sort();
    genres.dedup();
    genres
}
