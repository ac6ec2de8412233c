//! Catalog filtering: search term, read year, rating set, genre.

use serde::{Deserialize, Serialize};
use std::fmt;

use lektyr_core::types::{Book, Rating};
use lektyr_core::Error;

/// The set of rating values (1..=10) a filter lets through.
///
/// All ratings are selected by default, and an empty set matches
/// nothing rather than everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct RatingSet([bool; 10]);

impl RatingSet {
    /// The set with every rating selected.
    pub fn all() -> Self {
        Self([true; 10])
    }

    /// The empty set (matches no book).
    pub fn none() -> Self {
        Self([false; 10])
    }

    /// Whether the given rating is selected.
    pub fn contains(&self, rating: Rating) -> bool {
        self.0[(rating.value() - 1) as usize]
    }

    /// Selects or deselects a rating value.
    pub fn set(&mut self, rating: Rating, selected: bool) {
        self.0[(rating.value() - 1) as usize] = selected;
    }

    /// Flips a rating value's selection.
    pub fn toggle(&mut self, rating: Rating) {
        self.0[(rating.value() - 1) as usize] ^= true;
    }

    /// Number of selected ratings.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&v| v).count()
    }

    /// Whether no rating is selected.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&v| !v)
    }

    /// Whether every rating is selected.
    pub fn is_all(&self) -> bool {
        self.0.iter().all(|&v| v)
    }

    /// Selected rating values, ascending.
    pub fn values(&self) -> Vec<u8> {
        (1..=10u8)
            .filter(|&v| self.0[(v - 1) as usize])
            .collect()
    }
}

impl Default for RatingSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for RatingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return write!(f, "all");
        }
        let values: Vec<String> = self.values().iter().map(u8::to_string).collect();
        write!(f, "{}", values.join(","))
    }
}

impl From<Vec<u8>> for RatingSet {
    fn from(values: Vec<u8>) -> Self {
        let mut set = Self::none();
        for v in values {
            if let Ok(rating) = Rating::new(v) {
                set.set(rating, true);
            }
        }
        set
    }
}

impl From<RatingSet> for Vec<u8> {
    fn from(set: RatingSet) -> Self {
        set.values()
    }
}

impl std::str::FromStr for RatingSet {
    type Err = Error;

    /// Parses a comma-separated list like `"7,8,9"`; `"all"` selects everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        let mut set = Self::none();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            set.set(part.parse::<Rating>()?, true);
        }
        Ok(set)
    }
}

/// Criteria for narrowing the catalog view.
///
/// `None` fields mean "all"; criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    /// Case-insensitive substring over title, author, and comments.
    pub search: Option<String>,
    /// Only books read in this year.
    pub read_year: Option<i32>,
    /// Allowed rating values.
    #[serde(default)]
    pub ratings: RatingSet,
    /// Only books with this exact genre.
    pub genre: Option<String>,
}

impl BookFilter {
    /// Whether a single book passes every criterion.
    pub fn matches(&self, book: &Book) -> bool {
        self.search_matches(book)
            && self.read_year.is_none_or(|y| book.read_year == y)
            && self.ratings.contains(book.rating)
            && self.genre.as_deref().is_none_or(|g| book.genre == g)
    }

    fn search_matches(&self, book: &Book) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        book.title.to_lowercase().contains(&term)
            || book.author.to_lowercase().contains(&term)
            || book.comments.to_lowercase().contains(&term)
    }

    /// Filters a slice of books, preserving input order.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Filters books through the given criteria, preserving input order.
///
/// Free-function entry point into the pipeline; equivalent to
/// [`BookFilter::apply`].
pub fn filter_books<'a>(books: &'a [Book], filter: &BookFilter) -> Vec<&'a Book> {
    filter.apply(books)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lektyr_core::types::{BookDraft, BookId};

    fn book(title: &str, author: &str, read_year: i32, rating: u8, genre: &str) -> Book {
        Book::from_draft(
            BookId::new(),
            BookDraft {
                title: title.to_string(),
                author: author.to_string(),
                year: Some(2000),
                read_year: Some(read_year),
                rating: Some(Rating::new(rating).unwrap()),
                genre: Some(genre.to_string()),
                comments: Some("a slow burn".to_string()),
                ..BookDraft::default()
            },
        )
        .unwrap()
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("Dune", "Frank Herbert", 2022, 9, "Science Fiction"),
            book("Persuasion", "Jane Austen", 2023, 7, "Classics"),
            book("The Trial", "Franz Kafka", 2023, 6, "Classics"),
        ]
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let books = shelf();
        assert_eq!(BookFilter::default().apply(&books).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_author_comments() {
        let books = shelf();
        let filter = BookFilter {
            search: Some("kafka".to_string()),
            ..BookFilter::default()
        };
        assert_eq!(filter.apply(&books).len(), 1);

        // "slow burn" lives in the comments of every test book
        let filter = BookFilter {
            search: Some("SLOW".to_string()),
            ..BookFilter::default()
        };
        assert_eq!(filter.apply(&books).len(), 3);
    }

    #[test]
    fn test_read_year_filter() {
        let books = shelf();
        let filter = BookFilter {
            read_year: Some(2023),
            ..BookFilter::default()
        };
        assert_eq!(filter.apply(&books).len(), 2);
    }

    #[test]
    fn test_genre_filter() {
        let books = shelf();
        let filter = BookFilter {
            genre: Some("Classics".to_string()),
            ..BookFilter::default()
        };
        assert_eq!(filter.apply(&books).len(), 2);
    }

    #[test]
    fn test_rating_set_narrows() {
        let books = shelf();
        let mut ratings = RatingSet::none();
        ratings.set(Rating::new(9).unwrap(), true);
        let filter = BookFilter {
            ratings,
            ..BookFilter::default()
        };
        let matched = filter.apply(&books);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Dune");
    }

    #[test]
    fn test_empty_rating_set_matches_nothing() {
        let books = shelf();
        let filter = BookFilter {
            ratings: RatingSet::none(),
            ..BookFilter::default()
        };
        assert!(filter.apply(&books).is_empty());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let books = shelf();
        let filter = BookFilter {
            search: Some("the".to_string()),
            read_year: Some(2023),
            genre: Some("Classics".to_string()),
            ..BookFilter::default()
        };
        let matched = filter.apply(&books);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "The Trial");
    }

    #[test]
    fn test_rating_set_parse() {
        let set: RatingSet = "7,8,9".parse().unwrap();
        assert_eq!(set.values(), vec![7, 8, 9]);
        assert!("0,5".parse::<RatingSet>().is_err());
        assert!("all".parse::<RatingSet>().unwrap().is_all());
    }

    #[test]
    fn test_rating_set_toggle_and_display() {
        let mut set = RatingSet::all();
        assert_eq!(set.to_string(), "all");
        set.toggle(Rating::new(10).unwrap());
        assert_eq!(set.len(), 9);
        assert_eq!(set.to_string(), "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn test_rating_set_serde_as_value_list() {
        let mut set = RatingSet::none();
        set.set(Rating::new(3).unwrap(), true);
        set.set(Rating::new(8).unwrap(), true);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[3,8]");
        let back: RatingSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
