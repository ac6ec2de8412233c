//! Lektyr Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Lektyr crates.
//! It has no internal Lektyr dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: The `Book` entity and its supporting types
//! - [`traits`]: The `BookStore` backend abstraction

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::BookStore;
pub use types::{Book, BookDraft, BookId, Page, PageOf, Rating};
