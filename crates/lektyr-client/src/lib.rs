//! Lektyr Client — REST client for a catalog backend.
//!
//! Speaks `POST /auth/login`, then bearer-authenticated `/books` CRUD. Before
//! every catalog call the stored session's expiry is checked locally;
//! a lapsed session fails fast with
//! [`Error::SessionExpired`](lektyr_core::Error::SessionExpired) without
//! touching the network, and a 401 from the server clears the stored
//! session the same way.
//!
//! Implements [`BookStore`](lektyr_core::BookStore), so callers can swap
//! between this and the local JSON store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;

pub use client::{CatalogClient, LoginResponse};
