//! Terminal output for books and catalog listings.

use std::fmt::Write;

use lektyr_core::types::{Book, Rating};
use lektyr_query::group_by_read_year;

/// Renders a rating as five stars, half stars included.
pub fn stars(rating: Rating) -> String {
    let breakdown = rating.stars();
    let mut out = String::with_capacity(5);
    for _ in 0..breakdown.full {
        out.push('★');
    }
    if breakdown.half {
        out.push('⯨');
    }
    for _ in 0..breakdown.empty {
        out.push('☆');
    }
    out
}

/// One catalog line: title, author, year published, stars.
pub fn book_line(book: &Book) -> String {
    let mut line = format!(
        "{}  {} — {} ({})",
        stars(book.rating),
        book.title,
        book.author,
        book.year
    );
    if book.genre != lektyr_core::types::DEFAULT_GENRE {
        let _ = write!(line, "  [{}]", book.genre);
    }
    line
}

/// The grouped catalog view: one heading per read year, newest first.
pub fn grouped_listing(books: &[&Book]) -> String {
    let mut out = String::new();
    for group in group_by_read_year(books) {
        let _ = writeln!(out, "{}", group.year);
        for book in group.books {
            let _ = writeln!(out, "  {}", book_line(book));
        }
    }
    out
}

/// The flat catalog view: one line per book, no headings.
pub fn flat_listing(books: &[&Book]) -> String {
    let mut out = String::new();
    for book in books {
        let _ = writeln!(out, "{}", book_line(book));
    }
    out
}

/// Full single-book view for `show`.
pub fn book_detail(book: &Book) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} — {}", book.title, book.author);
    let _ = writeln!(out, "  id:        {}", book.id);
    let _ = writeln!(out, "  published: {}", book.year);
    let _ = writeln!(out, "  read:      {}", book.read_year);
    if let Some(pages) = book.pages {
        let _ = writeln!(out, "  pages:     {pages}");
    }
    let _ = writeln!(out, "  rating:    {}  {}", stars(book.rating), book.rating);
    let _ = writeln!(out, "  genre:     {}", book.genre);
    if !book.comments.is_empty() {
        let _ = writeln!(out, "  comments:  {}", book.comments);
    }
    out
}
