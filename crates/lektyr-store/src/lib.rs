//! Lektyr Store — local storage backends for the book catalog.
//!
//! This crate provides the [`BookStore`](lektyr_core::BookStore)
//! implementations that live on this machine:
//!
//! - [`MemoryStore`]: in-memory catalog, used in tests and as the API
//!   server's volatile backing
//! - [`JsonFileStore`]: catalog persisted to a single JSON file on disk

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
