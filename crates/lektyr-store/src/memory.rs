//! In-memory catalog store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use lektyr_core::types::{Book, BookDraft, BookId, Page, PageOf};
use lektyr_core::{BookStore, Error, Result};

/// A catalog held entirely in memory.
///
/// Contents are lost on drop; used by tests and by the API server when no
/// data file is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the given books.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Number of books currently held.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    /// Whether the store holds no books.
    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self, page: Page) -> Result<PageOf<Book>> {
        let books = self.books.read().await.clone();
        Ok(PageOf::slice(books, page))
    }

    async fn get(&self, id: &BookId) -> Result<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == *id)
            .cloned()
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    async fn add(&self, draft: BookDraft) -> Result<Book> {
        let book = Book::from_draft(BookId::new(), draft)?;
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book.clone();
                Ok(book)
            }
            None => Err(Error::not_found(book.id.to_string())),
        }
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != *id);
        if books.len() == before {
            return Err(Error::not_found(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "someone".to_string(),
            year: Some(2001),
            read_year: Some(2024),
            ..BookDraft::default()
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_lists() {
        let store = MemoryStore::new();
        let added = store.add(draft("Blindsight")).await.unwrap();
        let page = store.list(Page::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, added.id);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_draft() {
        let store = MemoryStore::new();
        let result = store.add(BookDraft::default()).await;
        assert!(result.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let store = MemoryStore::new();
        let added = store.add(draft("Solaris")).await.unwrap();
        let fetched = store.get(&added.id).await.unwrap();
        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get(&BookId::new()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = MemoryStore::new();
        let mut book = store.add(draft("Roadside Picnic")).await.unwrap();
        book.comments = "re-read".to_string();
        store.update(book.clone()).await.unwrap();
        assert_eq!(store.get(&book.id).await.unwrap().comments, "re-read");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let book = Book::from_draft(BookId::new(), draft("Ghost")).unwrap();
        assert!(matches!(
            store.update(book).await.unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = MemoryStore::new();
        let a = store.add(draft("A")).await.unwrap();
        store.add(draft("B")).await.unwrap();
        store.delete(&a.id).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert!(store.get(&a.id).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete(&BookId::new()).await.unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_pages() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.add(draft(&format!("Book {i}"))).await.unwrap();
        }
        let page = store.list(Page::new(1, 2)).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.items[0].title, "Book 2");
    }
}
