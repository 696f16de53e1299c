//! Plain-text table with sort indicators in the headers.

use bookshelf_core::{SortAttribute, SortedView};
use bookshelf_model::Book;
use std::fmt::Write;

const SEPARATOR: &str = "  ";

fn cell(book: &Book, attribute: SortAttribute) -> String {
    match attribute {
        SortAttribute::Title => book.title.clone(),
        SortAttribute::Author => book.author_name().to_string(),
        SortAttribute::Shelf => book.shelf_name().to_string(),
        SortAttribute::Genre => book
            .genre
            .map(|genre| genre.to_string())
            .unwrap_or_default(),
        SortAttribute::Rating => book
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_default(),
    }
}

fn header(view: &SortedView<Book>, attribute: SortAttribute) -> String {
    format!("{}{}", attribute.label(), view.indicator(attribute).glyph())
}

/// Render `view` with one column per sortable attribute.
pub fn table(view: &SortedView<Book>) -> String {
    let headers: Vec<String> = SortAttribute::ALL
        .iter()
        .map(|&attribute| header(view, attribute))
        .collect();
    let rows: Vec<Vec<String>> = view
        .items
        .iter()
        .map(|book| {
            SortAttribute::ALL
                .iter()
                .map(|&attribute| cell(book, attribute))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(headers[column].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&headers).chain(rows.iter()) {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", rendered.join(SEPARATOR).trim_end());
    }
    out
}
