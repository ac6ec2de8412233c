//! The catalog REST client.

use async_trait::async_trait;
use serde::Deserialize;

use lektyr_auth::{Session, SessionFile};
use lektyr_core::types::{Book, BookDraft, BookId, Page, PageOf};
use lektyr_core::{BookStore, Error, Result};

/// REST client for a Lektyr catalog backend.
///
/// Holds the backend base URL, a connection-pooling HTTP client, and the
/// on-disk session record.
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionFile,
}

/// What `POST /auth/login` returns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Display name of the logged-in user.
    pub full_name: String,
    /// Token lifetime in seconds; backends may omit it.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Error body shape the backend uses: either a bare `message` or a
/// nested `error.message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<NestedError>,
}

#[derive(Debug, Deserialize)]
struct NestedError {
    message: Option<String>,
}

/// Backends answer `GET /books` either as a page envelope or as a bare
/// array; both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody {
    Paged {
        books: Vec<Book>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<Book>),
}

impl CatalogClient {
    /// A client for the backend at `base_url`, using the given session file.
    pub fn new(base_url: impl Into<String>, session: SessionFile) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            session,
        }
    }

    /// The backend this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Logs in and stores the resulting session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(http_error)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::api(401, "invalid username or password"));
        }
        let response = error_for_status(response).await?;

        let login: LoginResponse = response.json().await.map_err(http_error)?;
        let session = Session::from_login(login.token, login.full_name, login.expires_in);
        self.session
            .save(&session)
            .map_err(|e| Error::config(e.to_string()))?;
        log::info!(
            "Logged in as {}, token expires at {}",
            session.full_name,
            session.expires_at
        );
        Ok(session)
    }

    /// Drops the stored session.
    pub fn logout(&self) -> Result<()> {
        self.session
            .clear()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// The current unexpired session, if any.
    pub fn current_session(&self) -> Result<Option<Session>> {
        self.session
            .load()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// The stored bearer token; fails with `SessionExpired` when the
    /// session is missing or lapsed (the pre-flight expiry check).
    fn bearer(&self) -> Result<String> {
        match self.current_session()? {
            Some(session) => Ok(session.token),
            None => Err(Error::SessionExpired),
        }
    }

    /// Maps a non-2xx catalog response to an error.
    ///
    /// 401 also clears the stored session — the auto-logout.
    async fn handle_error(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            log::warn!("Server rejected token, clearing authentication data");
            let _ = self.session.clear();
            return Error::SessionExpired;
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Error::forbidden("you must be an admin to perform this action");
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message.or(b.error.and_then(|e| e.message)))
            .unwrap_or_else(|| format!("API error: {status}"));
        Error::api(status.as_u16(), message)
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.handle_error(response).await)
        }
    }
}

/// Like [`CatalogClient::check`] but for the login call, where there is
/// no session to clear.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.message.or(b.error.and_then(|e| e.message)))
        .unwrap_or_else(|| format!("API error: {status}"));
    Err(Error::api(status.as_u16(), message))
}

fn http_error(e: reqwest::Error) -> Error {
    Error::Api {
        status: e.status().map(|s| s.as_u16()),
        message: e.to_string(),
    }
}

#[async_trait]
impl BookStore for CatalogClient {
    async fn list(&self, page: Page) -> Result<PageOf<Book>> {
        let token = self.bearer()?;
        let response = self
            .http
            .get(format!(
                "{}/books?page={}&size={}",
                self.base_url, page.page, page.size
            ))
            .bearer_auth(token)
            .send()
            .await
            .map_err(http_error)?;
        let response = self.check(response).await?;

        let body: ListBody = response.json().await.map_err(http_error)?;
        Ok(match body {
            ListBody::Paged { books, total } => {
                let total = total.unwrap_or(books.len() as u64);
                PageOf {
                    items: books,
                    page: page.page,
                    size: page.size,
                    total,
                }
            }
            ListBody::Bare(books) => {
                let total = books.len() as u64;
                PageOf {
                    items: books,
                    page: page.page,
                    size: page.size,
                    total,
                }
            }
        })
    }

    async fn get(&self, id: &BookId) -> Result<Book> {
        let token = self.bearer()?;
        let response = self
            .http
            .get(format!("{}/books/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(http_error)?;
        let response = self.check(response).await?;
        response.json().await.map_err(http_error)
    }

    async fn add(&self, draft: BookDraft) -> Result<Book> {
        // Validate locally so a bad draft never reaches the wire
        draft.validate()?;
        let token = self.bearer()?;
        let response = self
            .http
            .post(format!("{}/books", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({ "book": draft }))
            .send()
            .await
            .map_err(http_error)?;
        let response = self.check(response).await?;
        response.json().await.map_err(http_error)
    }

    async fn update(&self, book: Book) -> Result<Book> {
        let token = self.bearer()?;
        let response = self
            .http
            .patch(format!("{}/books", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({ "book": book }))
            .send()
            .await
            .map_err(http_error)?;
        let response = self.check(response).await?;
        response.json().await.map_err(http_error)
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        let token = self.bearer()?;
        let response = self
            .http
            .delete(format!("{}/books/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(http_error)?;
        self.check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn client_with_session(session: Option<Session>) -> (tempfile::TempDir, CatalogClient) {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("session.json"));
        if let Some(s) = &session {
            file.save(s).unwrap();
        }
        (dir, CatalogClient::new("http://localhost:8016/", file))
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let (_dir, client) = client_with_session(None);
        assert_eq!(client.base_url(), "http://localhost:8016");
    }

    #[test]
    fn test_bearer_without_session_is_session_expired() {
        let (_dir, client) = client_with_session(None);
        assert!(matches!(client.bearer().unwrap_err(), Error::SessionExpired));
    }

    #[test]
    fn test_bearer_with_live_session() {
        let session = Session::from_login("tok-1", "Maria", Some(600));
        let (_dir, client) = client_with_session(Some(session));
        assert_eq!(client.bearer().unwrap(), "tok-1");
    }

    #[tokio::test]
    async fn test_expired_session_fails_before_any_request() {
        let mut session = Session::from_login("tok-1", "Maria", Some(600));
        session.expires_at = Utc::now() - Duration::seconds(5);
        let (_dir, client) = client_with_session(Some(session));

        // Nothing is listening on the base URL; an expired session must
        // fail locally, not with a connection error.
        let err = client.list(Page::default()).await.unwrap_err();
        assert!(matches!(err, Error::SessionExpired));
        // And the session file was cleared on load
        assert!(client.current_session().unwrap().is_none());
    }

    #[test]
    fn test_login_response_expires_in_optional() {
        let with: LoginResponse =
            serde_json::from_str(r#"{"token":"t","fullName":"M","expiresIn":7200}"#).unwrap();
        assert_eq!(with.expires_in, Some(7200));

        let without: LoginResponse =
            serde_json::from_str(r#"{"token":"t","fullName":"M"}"#).unwrap();
        assert_eq!(without.expires_in, None);
    }

    #[test]
    fn test_list_body_accepts_both_shapes() {
        let envelope = r#"{"books": [], "total": 12}"#;
        let body: ListBody = serde_json::from_str(envelope).unwrap();
        assert!(matches!(body, ListBody::Paged { total: Some(12), .. }));

        let bare = r#"[]"#;
        let body: ListBody = serde_json::from_str(bare).unwrap();
        assert!(matches!(body, ListBody::Bare(_)));
    }

    #[test]
    fn test_error_body_both_shapes() {
        let flat: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(flat.message.as_deref(), Some("nope"));

        let nested: ErrorBody =
            serde_json::from_str(r#"{"error":{"code":401,"message":"expired"}}"#).unwrap();
        assert_eq!(nested.error.unwrap().message.as_deref(), Some("expired"));
    }
}
