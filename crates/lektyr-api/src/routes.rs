//! Route handlers and router assembly.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use lektyr_auth::{issue_token, AuthConfig, AuthLayer, AuthenticatedUser, JwtValidator};
use lektyr_core::{Book, BookDraft, BookId, Page};

use crate::error::AppError;
use crate::extractors::MaybeUser;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Login password.
    pub password: String,
}

/// Login response body, in the shape the web client expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Display name of the authenticated user.
    pub full_name: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// `{"book": ...}` request envelope used by create and update.
#[derive(Debug, Deserialize)]
pub struct BookEnvelope<T> {
    /// The wrapped book payload.
    pub book: T,
}

/// One page of the catalog.
#[derive(Debug, Serialize)]
pub struct BookPage {
    /// Books on this page.
    pub books: Vec<Book>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Total books across all pages.
    pub total: u64,
}

/// Assembles the application router.
///
/// `/auth/login` and `/health` are public; everything under `/books`
/// sits behind the bearer-token middleware.
pub fn router(state: AppState) -> Router {
    let auth_layer = AuthLayer::new(
        Arc::new(JwtValidator::new(state.config.auth.secret.clone())),
        AuthConfig {
            enabled: state.config.auth.enabled,
        },
    );

    let catalog = Router::new()
        .route(
            "/books",
            get(list_books).post(add_book).patch(update_book),
        )
        .route("/books/{id}", get(get_book).delete(delete_book))
        .layer(auth_layer);

    Router::new()
        .route("/auth/login", post(login))
        .route("/health", get(health))
        .merge(catalog)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginReply>, AppError> {
    let user = state
        .config
        .find_user(&req.username, &req.password)
        .ok_or_else(|| AppError::Unauthorized("invalid username or password".to_string()))?;

    let ttl = state.config.auth.token_ttl_secs;
    let token = issue_token(
        &state.config.auth.secret,
        &user.username,
        &user.full_name,
        user.role,
        ttl,
    )
    .map_err(|e| AppError::Internal(format!("failed to issue token: {e}")))?;

    tracing::info!(username = %user.username, "login succeeded");
    Ok(Json(LoginReply {
        token,
        full_name: user.full_name.clone(),
        expires_in: ttl,
    }))
}

async fn list_books(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<BookPage>, AppError> {
    let result = state.store.list(page).await?;
    Ok(Json(BookPage {
        books: result.items,
        page: result.page,
        size: result.size,
        total: result.total,
    }))
}

async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id)?;
    let book = state.store.get(&id).await?;
    Ok(Json(book))
}

async fn add_book(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(envelope): Json<BookEnvelope<BookDraft>>,
) -> Result<impl IntoResponse, AppError> {
    require_writer(&state, user.as_ref())?;
    let book = state.store.add(envelope.book).await?;
    tracing::info!(id = %book.id, title = %book.title, "book added");
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(envelope): Json<BookEnvelope<Book>>,
) -> Result<Json<Book>, AppError> {
    require_writer(&state, user.as_ref())?;
    let book = state.store.update(envelope.book).await?;
    tracing::info!(id = %book.id, "book updated");
    Ok(Json(book))
}

async fn delete_book(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_writer(&state, user.as_ref())?;
    let id = parse_id(&id)?;
    state.store.delete(&id).await?;
    tracing::info!(%id, "book deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}

fn parse_id(raw: &str) -> Result<BookId, AppError> {
    raw.parse::<BookId>()
        .map_err(|_| AppError::Validation(format!("invalid book id: {raw}")))
}

/// Mutations require the `admin` role. With auth disabled every caller
/// may write; with auth enabled the middleware guarantees a user is
/// present, so a missing one is treated as unauthorized.
fn require_writer(state: &AppState, user: Option<&AuthenticatedUser>) -> Result<(), AppError> {
    if !state.config.auth.enabled {
        return Ok(());
    }
    match user {
        Some(user) if user.role.can_write() => Ok(()),
        Some(_) => Err(AppError::Forbidden(
            "admin role required for this operation".to_string(),
        )),
        None => Err(AppError::Unauthorized(
            "authentication required".to_string(),
        )),
    }
}
