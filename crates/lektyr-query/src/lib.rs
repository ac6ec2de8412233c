//! Lektyr Query — the client-side filter / sort / group pipeline.
//!
//! Pure, synchronous functions over in-memory books. The pipeline mirrors
//! the catalog view: filter by search term, read year, rating set, and
//! genre; sort by a single key; group by read year, newest first.
//!
//! # Modules
//!
//! - [`filter`]: [`BookFilter`] and [`RatingSet`]
//! - [`sort`]: [`SortKey`] and stable sorting
//! - [`group`]: read-year grouping and distinct-value helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod group;
pub mod sort;

mod proptests;

pub use filter::{filter_books, BookFilter, RatingSet};
pub use group::{group_by_read_year, unique_genres, unique_read_years, YearGroup};
pub use sort::{sort_books, SortKey};
