//! Backend abstraction for the book catalog.
//!
//! Both the local JSON store and the REST client implement [`BookStore`],
//! so callers (the CLI in particular) stay backend-agnostic.

use async_trait::async_trait;

use crate::types::{Book, BookDraft, BookId, Page, PageOf};
use crate::Result;

/// A catalog backend: CRUD plus paged listing over books.
///
/// Implementations must be shareable across tasks (`Send + Sync`); the
/// API server holds one behind an `Arc`.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Lists one page of the catalog.
    async fn list(&self, page: Page) -> Result<PageOf<Book>>;

    /// Fetches a single book by id.
    async fn get(&self, id: &BookId) -> Result<Book>;

    /// Adds a new book; the backend assigns the id and applies form defaults.
    async fn add(&self, draft: BookDraft) -> Result<Book>;

    /// Replaces the book with the same id; fails if it does not exist.
    async fn update(&self, book: Book) -> Result<Book>;

    /// Removes a book by id; fails if it does not exist.
    async fn delete(&self, id: &BookId) -> Result<()>;
}
