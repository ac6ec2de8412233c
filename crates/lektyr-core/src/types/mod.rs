//! Core types for the Lektyr book catalog.

mod book;
mod ids;
mod page;
mod rating;

pub use book::{Book, BookDraft, DEFAULT_GENRE, PLACEHOLDER_IMAGE};
pub use ids::BookId;
pub use page::{Page, PageOf};
pub use rating::{Rating, Stars};
