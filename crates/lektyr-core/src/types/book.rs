//! The `Book` entity and its create/edit draft.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{BookId, Rating};

/// Cover image URL used when the form leaves the image field blank.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/120/180";

/// Genre applied when the form leaves the genre field blank.
pub const DEFAULT_GENRE: &str = "Uncategorized";

/// A book in the catalog.
///
/// Serializes with camelCase field names on the wire (`readYear` for
/// the year the book was read).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Backend-assigned identifier.
    pub id: BookId,

    /// Book title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Year of publication.
    pub year: i32,

    /// Year the book was read; the catalog groups by this field.
    pub read_year: i32,

    /// Page count, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,

    /// Rating on the 1–10 scale.
    #[serde(default)]
    pub rating: Rating,

    /// Genre label; defaults to "Uncategorized".
    #[serde(default = "default_genre")]
    pub genre: String,

    /// Free-form reading notes.
    #[serde(default)]
    pub comments: String,

    /// Cover image URL.
    #[serde(default = "default_image")]
    pub image: String,
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Book {
    /// Builds a book from a validated draft, applying form defaults.
    ///
    /// Fails with a validation error when a required field is missing.
    pub fn from_draft(id: BookId, draft: BookDraft) -> crate::Result<Self> {
        draft.validate()?;
        Ok(Self {
            id,
            title: draft.title,
            author: draft.author,
            // validate() guarantees both years are present
            year: draft.year.unwrap_or_default(),
            read_year: draft.read_year.unwrap_or_default(),
            pages: draft.pages,
            rating: draft.rating.unwrap_or_default(),
            genre: non_blank_or(draft.genre, DEFAULT_GENRE),
            comments: draft.comments.unwrap_or_default(),
            image: non_blank_or(draft.image, PLACEHOLDER_IMAGE),
        })
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// The create/edit form payload: a book without an id, with optional fields.
///
/// Title, author, year published, and year read are required; the rest
/// fall back to defaults on [`validate`](BookDraft::validate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    /// Book title (required).
    #[serde(default)]
    pub title: String,

    /// Author name (required).
    #[serde(default)]
    pub author: String,

    /// Year of publication (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Year the book was read (required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_year: Option<i32>,

    /// Page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,

    /// Rating; defaults to 5 when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Genre; defaults to "Uncategorized" when omitted or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Free-form reading notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// Cover image URL; defaults to the placeholder when omitted or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BookDraft {
    /// Checks that all required fields are filled in.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation_field("title", "must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(Error::validation_field("author", "must not be empty"));
        }
        if self.year.is_none() {
            return Err(Error::validation_field("year", "year published is required"));
        }
        if self.read_year.is_none() {
            return Err(Error::validation_field("readYear", "year read is required"));
        }
        Ok(())
    }
}

impl From<Book> for BookDraft {
    /// Turns an existing book back into an editable draft (the edit form).
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            year: Some(book.year),
            read_year: Some(book.read_year),
            pages: book.pages,
            rating: Some(book.rating),
            genre: Some(book.genre),
            comments: Some(book.comments),
            image: Some(book.image),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        BookDraft {
            title: "The Dispossessed".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            year: Some(1974),
            read_year: Some(2023),
            ..BookDraft::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_title() {
        let mut d = draft();
        d.title = "  ".to_string();
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("Validation"));
    }

    #[test]
    fn test_validate_requires_author() {
        let mut d = draft();
        d.author = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_requires_both_years() {
        let mut d = draft();
        d.year = None;
        assert!(d.validate().is_err());

        let mut d = draft();
        d.read_year = None;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_from_draft_applies_defaults() {
        let book = Book::from_draft(BookId::new(), draft()).unwrap();
        assert_eq!(book.rating.value(), 5);
        assert_eq!(book.genre, DEFAULT_GENRE);
        assert_eq!(book.image, PLACEHOLDER_IMAGE);
        assert_eq!(book.comments, "");
        assert_eq!(book.pages, None);
    }

    #[test]
    fn test_from_draft_keeps_explicit_fields() {
        let mut d = draft();
        d.rating = Some(Rating::new(9).unwrap());
        d.genre = Some("Science Fiction".to_string());
        d.pages = Some(387);
        let book = Book::from_draft(BookId::new(), d).unwrap();
        assert_eq!(book.rating.value(), 9);
        assert_eq!(book.genre, "Science Fiction");
        assert_eq!(book.pages, Some(387));
    }

    #[test]
    fn test_from_draft_blank_genre_falls_back() {
        let mut d = draft();
        d.genre = Some("   ".to_string());
        let book = Book::from_draft(BookId::new(), d).unwrap();
        assert_eq!(book.genre, DEFAULT_GENRE);
    }

    #[test]
    fn test_from_draft_rejects_invalid() {
        let err = Book::from_draft(BookId::new(), BookDraft::default()).unwrap_err();
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let book = Book::from_draft(BookId::new(), draft()).unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("readYear").is_some());
        assert!(json.get("read_year").is_none());
    }

    #[test]
    fn test_book_roundtrips_through_draft() {
        let mut d = draft();
        d.comments = Some("slow start, great ending".to_string());
        let book = Book::from_draft(BookId::new(), d).unwrap();
        let edited = BookDraft::from(book.clone());
        let rebuilt = Book::from_draft(book.id, edited).unwrap();
        assert_eq!(rebuilt, book);
    }
}
