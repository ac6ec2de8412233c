//! Command implementations: session handling and catalog operations.

use std::io::{self, BufRead, Write};

use lektyr_auth::SessionFile;
use lektyr_client::CatalogClient;
use lektyr_core::types::{BookDraft, BookId, Page};
use lektyr_core::BookStore;
use lektyr_query::{filter_books, sort_books, BookFilter, RatingSet};
use lektyr_store::JsonFileStore;

use crate::cli::{AddArgs, EditArgs, ListArgs};
use crate::config::{Backend, CliConfig};
use crate::error::{Error, Result};
use crate::render;

/// Opens the configured backend.
///
/// Both backends come back as a boxed [`BookStore`], so every catalog
/// command below is backend-agnostic.
pub async fn open_store(config: &CliConfig) -> Result<Box<dyn BookStore>> {
    match config.backend {
        Backend::Local => Ok(Box::new(JsonFileStore::open(config.data_path()?).await?)),
        Backend::Remote => Ok(Box::new(remote_client(config)?)),
    }
}

/// A REST client for the configured remote backend.
pub fn remote_client(config: &CliConfig) -> Result<CatalogClient> {
    let session = SessionFile::new(config.session_path()?);
    Ok(CatalogClient::new(config.remote.base_url.clone(), session))
}

/// `login` — authenticate against the remote backend and store the session.
pub async fn cmd_login(
    config: &CliConfig,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt("Password: ")?,
    };
    let client = remote_client(config)?;
    let session = client.login(username, &password).await?;
    println!(
        "Logged in as {}; session expires at {}",
        session.full_name, session.expires_at
    );
    Ok(())
}

/// `logout` — drop the stored session.
pub fn cmd_logout(config: &CliConfig) -> Result<()> {
    remote_client(config)?.logout()?;
    println!("Logged out.");
    Ok(())
}

/// `whoami` — report session status and expiry.
pub fn cmd_whoami(config: &CliConfig) -> Result<()> {
    match remote_client(config)?.current_session()? {
        Some(session) => println!(
            "{} (session expires at {})",
            session.full_name, session.expires_at
        ),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// `list` — fetch a page, run it through the filter/sort pipeline, and
/// print it grouped by read year (or flat).
pub async fn cmd_list(config: &CliConfig, args: ListArgs) -> Result<()> {
    let store = open_store(config).await?;
    let page = store.list(Page::new(args.page, args.size)).await?;

    let filter = BookFilter {
        search: args.search,
        read_year: args.read_year,
        ratings: args.ratings.unwrap_or_else(RatingSet::all),
        genre: args.genre,
    };
    let mut matched = filter_books(&page.items, &filter);
    sort_books(&mut matched, args.sort);

    if matched.is_empty() {
        println!("No books matched.");
        return Ok(());
    }

    if args.flat {
        print!("{}", render::flat_listing(&matched));
    } else {
        print!("{}", render::grouped_listing(&matched));
    }
    println!("{} of {} book(s)", matched.len(), page.total);
    Ok(())
}

/// `show` — print one book in full.
pub async fn cmd_show(config: &CliConfig, id: &str) -> Result<()> {
    let store = open_store(config).await?;
    let book = store.get(&parse_id(id)?).await?;
    print!("{}", render::book_detail(&book));
    Ok(())
}

/// `add` — create a book from the given field flags.
pub async fn cmd_add(config: &CliConfig, args: AddArgs) -> Result<()> {
    let draft = BookDraft {
        title: args.title,
        author: args.author,
        year: Some(args.year),
        read_year: Some(args.read_year),
        pages: args.pages,
        rating: args.rating,
        genre: args.genre,
        comments: args.comments,
        image: args.image,
    };
    let store = open_store(config).await?;
    let book = store.add(draft).await?;
    println!("Added \"{}\" ({})", book.title, book.id);
    Ok(())
}

/// `edit` — fetch the book and replace just the fields that were given.
pub async fn cmd_edit(config: &CliConfig, args: EditArgs) -> Result<()> {
    let store = open_store(config).await?;
    let mut book = store.get(&parse_id(&args.id)?).await?;

    if let Some(title) = args.title {
        book.title = title;
    }
    if let Some(author) = args.author {
        book.author = author;
    }
    if let Some(year) = args.year {
        book.year = year;
    }
    if let Some(read_year) = args.read_year {
        book.read_year = read_year;
    }
    if let Some(pages) = args.pages {
        book.pages = Some(pages);
    }
    if let Some(rating) = args.rating {
        book.rating = rating;
    }
    if let Some(genre) = args.genre {
        book.genre = genre;
    }
    if let Some(comments) = args.comments {
        book.comments = comments;
    }
    if let Some(image) = args.image {
        book.image = image;
    }

    let updated = store.update(book).await?;
    println!("Updated \"{}\"", updated.title);
    Ok(())
}

/// `rm` — delete a book, asking first unless `--yes` was given.
pub async fn cmd_rm(config: &CliConfig, id: &str, yes: bool) -> Result<()> {
    let store = open_store(config).await?;
    let id = parse_id(id)?;
    let book = store.get(&id).await?;

    if !yes {
        let answer = prompt(&format!("Delete \"{}\" by {}? [y/N] ", book.title, book.author))?;
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            return Err(Error::Aborted("delete cancelled".to_string()));
        }
    }

    store.delete(&id).await?;
    println!("Deleted \"{}\"", book.title);
    Ok(())
}

fn parse_id(raw: &str) -> Result<BookId> {
    raw.parse::<BookId>().map_err(|_| {
        Error::Core(lektyr_core::Error::validation_field(
            "id",
            format!("not a valid book id: '{raw}'"),
        ))
    })
}

fn prompt(message: &str) -> Result<String> {
    eprint!("{message}");
    io::stderr().flush().map_err(lektyr_core::Error::from)?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(lektyr_core::Error::from)?;
    Ok(line.trim_end().to_string())
}
