//! Lektyr API — HTTP backend for the book catalog.
//!
//! Serves the wire protocol [`lektyr-client`](../lektyr_client) expects:
//!
//! - `POST /auth/login` — credentials in, `{ token, fullName, expiresIn }` out
//! - `GET /books?page&size` — one page of the catalog
//! - `GET /books/{id}` / `POST /books` / `PATCH /books` / `DELETE /books/{id}`
//! - `GET /health` — unauthenticated liveness probe
//!
//! Catalog routes sit behind the [`AuthLayer`](lektyr_auth::AuthLayer);
//! mutations additionally require the `admin` role. No business logic in
//! route handlers — they delegate to the configured
//! [`BookStore`](lektyr_core::BookStore).

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::AppError;
pub use state::AppState;
