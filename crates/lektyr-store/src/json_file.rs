//! JSON-file-backed catalog store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use lektyr_core::types::{Book, BookDraft, BookId, Page, PageOf};
use lektyr_core::{BookStore, Error, Result};

/// A catalog persisted to a single JSON file.
///
/// The whole catalog is small (a personal bookshelf), so every mutation
/// rewrites the file: serialize to a sibling `.tmp` file, then rename over
/// the target so a crash never leaves a half-written catalog behind.
///
/// A missing file means an empty catalog; a file that exists but does not
/// parse is an error, never silent data loss.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    books: RwLock<Vec<Book>>,
}

impl JsonFileStore {
    /// Opens the catalog at `path`, creating parent directories as needed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let books = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No catalog file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        log::info!("Opened catalog at {} ({} books)", path.display(), books.len());
        Ok(Self {
            path,
            books: RwLock::new(books),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the catalog out, temp-file-then-rename.
    async fn persist(&self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string_pretty(books)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl BookStore for JsonFileStore {
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

    // Mutations persist a scratch copy first and only then commit it to
    // memory, so a failed write leaves the in-memory catalog unchanged.

    async fn add(&self, draft: BookDraft) -> Result<Book> {
        let book = Book::from_draft(BookId::new(), draft)?;
        let mut books = self.books.write().await;
        let mut next = books.clone();
        next.push(book.clone());
        self.persist(&next).await?;
        *books = next;
        Ok(book)
    }

    async fn update(&self, book: Book) -> Result<Book> {
        let mut books = self.books.write().await;
        let mut next = books.clone();
        let Some(slot) = next.iter_mut().find(|b| b.id == book.id) else {
            return Err(Error::not_found(book.id.to_string()));
        };
        *slot = book.clone();
        self.persist(&next).await?;
        *books = next;
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        let mut books = self.books.write().await;
        let mut next = books.clone();
        let before = next.len();
        next.retain(|b| b.id != *id);
        if next.len() == before {
            return Err(Error::not_found(id.to_string()));
        }
        self.persist(&next).await?;
        *books = next;
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
            year: Some(1961),
            read_year: Some(2024),
            ..BookDraft::default()
        }
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("catalog.json"))
            .await
            .unwrap();
        let page = store.list(Page::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_add_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let added = store.add(draft("Solaris")).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let fetched = reopened.get(&added.id).await.unwrap();
        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn test_update_and_delete_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let mut a = store.add(draft("A")).await.unwrap();
        let b = store.add(draft("B")).await.unwrap();
        a.comments = "loved it".to_string();
        store.update(a.clone()).await.unwrap();
        store.delete(&b.id).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let page = reopened.list(Page::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].comments, "loved it");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = JsonFileStore::open(&path).await.unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        store.add(draft("A")).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_catalog_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let kept = store.add(draft("A")).await.unwrap();

        // A directory squatting on the temp path makes every write fail
        tokio::fs::create_dir(path.with_extension("json.tmp"))
            .await
            .unwrap();

        assert!(store.add(draft("B")).await.is_err());
        let page = store.list(Page::default()).await.unwrap();
        assert_eq!(page.total, 1);

        let mut edited = kept.clone();
        edited.comments = "never lands".to_string();
        assert!(store.update(edited).await.is_err());
        assert!(store.delete(&kept.id).await.is_err());

        let page = store.list(Page::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0], kept);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_does_not_touch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        store.add(draft("A")).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();

        assert!(store.delete(&BookId::new()).await.is_err());
        let after = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, after);
    }
}
