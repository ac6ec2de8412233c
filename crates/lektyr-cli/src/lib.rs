//! # lektyr-cli
//!
//! Command-line front end for the Lektyr book catalog:
//! - Session management (`login`, `logout`, `whoami`)
//! - Catalog browsing (`list` with search/filter/sort, `show`)
//! - Catalog editing (`add`, `edit`, `rm`)
//! - Configuration management (`config path|get|set|init`)
//!
//! Works against either a local JSON catalog or the REST backend,
//! selected in the configuration file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod render;

pub use error::{Error, Result};
