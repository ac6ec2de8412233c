//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

use lektyr_core::types::Rating;
use lektyr_query::{RatingSet, SortKey};

/// Lektyr - book catalog manager
#[derive(Parser, Debug)]
#[command(name = "lektyr")]
#[command(version, about = "Manage a personal book catalog", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LEKTYR_CONFIG", global = true)]
    pub config: Option<String>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in to the remote backend and store the session
    Login {
        /// Login name
        username: String,
        /// Password; prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the stored session
    Logout,
    /// Show who is logged in and when the session expires
    Whoami,
    /// List the catalog, grouped by year read
    List(ListArgs),
    /// Show one book in full
    Show {
        /// Book id
        id: String,
    },
    /// Add a book to the catalog
    Add(AddArgs),
    /// Edit fields of an existing book
    Edit(EditArgs),
    /// Remove a book from the catalog
    Rm {
        /// Book id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        /// The config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags for the `list` command, mirroring the catalog view controls.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Match titles, authors, and comments (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only books read in this year
    #[arg(short = 'y', long = "year")]
    pub read_year: Option<i32>,

    /// Only books with this genre
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Only books with these ratings, e.g. "7,8,9"
    #[arg(short, long)]
    pub ratings: Option<RatingSet>,

    /// Sort key: read-year, title, author, rating, year, or genre
    #[arg(long, default_value_t = SortKey::default())]
    pub sort: SortKey,

    /// Plain list instead of year groups
    #[arg(long)]
    pub flat: bool,

    /// Zero-based page to fetch
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Books per page
    #[arg(long, default_value_t = 30)]
    pub size: u32,
}

/// Fields for `add`; title, author, and both years are required.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: String,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Year published
    #[arg(long)]
    pub year: i32,

    /// Year read
    #[arg(long = "read-year")]
    pub read_year: i32,

    /// Page count
    #[arg(long)]
    pub pages: Option<u32>,

    /// Rating 1-10 (default 5)
    #[arg(long)]
    pub rating: Option<Rating>,

    /// Genre (default "Uncategorized")
    #[arg(long)]
    pub genre: Option<String>,

    /// Reading notes
    #[arg(long)]
    pub comments: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// Fields for `edit`; only the given flags change.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Book id
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New author
    #[arg(long)]
    pub author: Option<String>,

    /// New year published
    #[arg(long)]
    pub year: Option<i32>,

    /// New year read
    #[arg(long = "read-year")]
    pub read_year: Option<i32>,

    /// New page count
    #[arg(long)]
    pub pages: Option<u32>,

    /// New rating 1-10
    #[arg(long)]
    pub rating: Option<Rating>,

    /// New genre
    #[arg(long)]
    pub genre: Option<String>,

    /// New reading notes
    #[arg(long)]
    pub comments: Option<String>,

    /// New cover image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Get a configuration value by dotted key
    Get {
        /// Key, e.g. "remote.base_url"
        key: String,
    },
    /// Set a configuration value by dotted key
    Set {
        /// Key, e.g. "backend"
        key: String,
        /// New value
        value: String,
    },
    /// Create a default configuration file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
