//! Catalog sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use lektyr_core::types::Book;
use lektyr_core::Error;

/// The key the catalog view sorts by.
///
/// Text keys sort ascending and case-insensitively; rating and both year
/// keys sort descending (newest / best first). The default is read year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Year read, descending.
    #[default]
    ReadYear,
    /// Title, ascending.
    Title,
    /// Author, ascending.
    Author,
    /// Rating, best first.
    Rating,
    /// Year published, newest first.
    Year,
    /// Genre, ascending.
    Genre,
}

impl SortKey {
    /// Compares two books under this key.
    ///
    /// Equal keys compare as `Equal`, so a stable sort preserves the
    /// incoming order for ties.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::ReadYear => b.read_year.cmp(&a.read_year),
            SortKey::Title => cmp_text(&a.title, &b.title),
            SortKey::Author => cmp_text(&a.author, &b.author),
            SortKey::Rating => b.rating.cmp(&a.rating),
            SortKey::Year => b.year.cmp(&a.year),
            SortKey::Genre => cmp_text(&a.genre, &b.genre),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::ReadYear => "read-year",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Genre => "genre",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read-year" | "read_year" | "readyear" => Ok(SortKey::ReadYear),
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "rating" => Ok(SortKey::Rating),
            "year" => Ok(SortKey::Year),
            "genre" => Ok(SortKey::Genre),
            other => Err(Error::validation_field(
                "sort",
                format!("unknown sort key '{other}'"),
            )),
        }
    }
}

/// Sorts books by the given key; ties keep their incoming order.
pub fn sort_books(books: &mut [&Book], key: SortKey) {
    books.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lektyr_core::types::{BookDraft, BookId, Rating};

    fn book(title: &str, author: &str, year: i32, read_year: i32, rating: u8) -> Book {
        Book::from_draft(
            BookId::new(),
            BookDraft {
                title: title.to_string(),
                author: author.to_string(),
                year: Some(year),
                read_year: Some(read_year),
                rating: Some(Rating::new(rating).unwrap()),
                ..BookDraft::default()
            },
        )
        .unwrap()
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_default_sort_is_read_year_desc() {
        let a = book("A", "x", 2000, 2021, 5);
        let b = book("B", "x", 2000, 2024, 5);
        let c = book("C", "x", 2000, 2022, 5);
        let mut refs: Vec<&Book> = vec![&a, &b, &c];
        sort_books(&mut refs, SortKey::default());
        assert_eq!(titles(&refs), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive_asc() {
        let a = book("the trial", "x", 2000, 2020, 5);
        let b = book("Dune", "x", 2000, 2020, 5);
        let c = book("Persuasion", "x", 2000, 2020, 5);
        let mut refs: Vec<&Book> = vec![&a, &b, &c];
        sort_books(&mut refs, SortKey::Title);
        assert_eq!(titles(&refs), vec!["Dune", "Persuasion", "the trial"]);
    }

    #[test]
    fn test_rating_sort_best_first() {
        let a = book("A", "x", 2000, 2020, 3);
        let b = book("B", "x", 2000, 2020, 10);
        let c = book("C", "x", 2000, 2020, 7);
        let mut refs: Vec<&Book> = vec![&a, &b, &c];
        sort_books(&mut refs, SortKey::Rating);
        assert_eq!(titles(&refs), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_published_year_sort_newest_first() {
        let a = book("A", "x", 1974, 2020, 5);
        let b = book("B", "x", 2019, 2020, 5);
        let mut refs: Vec<&Book> = vec![&a, &b];
        sort_books(&mut refs, SortKey::Year);
        assert_eq!(titles(&refs), vec!["B", "A"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = book("First", "same", 2000, 2020, 5);
        let b = book("Second", "same", 2000, 2020, 5);
        let mut refs: Vec<&Book> = vec![&a, &b];
        sort_books(&mut refs, SortKey::Author);
        assert_eq!(titles(&refs), vec!["First", "Second"]);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("read-year".parse::<SortKey>().unwrap(), SortKey::ReadYear);
        assert_eq!("readYear".parse::<SortKey>().unwrap(), SortKey::ReadYear);
        assert_eq!("Title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert!("pages".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for key in [
            SortKey::ReadYear,
            SortKey::Title,
            SortKey::Author,
            SortKey::Rating,
            SortKey::Year,
            SortKey::Genre,
        ] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }
}
