//! `bookshelfctl`: sort a JSON list of books the way the list view does.

mod render;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use bookshelf_config::{ConfigLoad, ConfigLoader};
use bookshelf_core::{AttributeName, SortAttribute, SortEngine, SortState};
use bookshelf_model::Book;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelfctl", about = "Sort and list tracked books")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort books from a JSON file and print them
    Sort {
        /// JSON array of books
        #[arg(long)]
        books: PathBuf,
        /// Column header clicks, applied in order (repeat a name to cycle it)
        #[arg(long = "toggle", value_name = "ATTRIBUTE")]
        toggles: Vec<String>,
        /// Config file; defaults to the BOOKSHELF_* environment lookup
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the sorted books as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List sortable attributes
    Attributes,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sort {
            books,
            toggles,
            config,
            json,
        } => run_sort(books, &toggles, config, json),
        Command::Attributes => {
            for attribute in SortAttribute::ALL {
                println!("{:<8} {}", attribute.id(), attribute.label());
            }
            Ok(())
        }
    }
}

fn run_sort(
    books_path: PathBuf,
    toggles: &[String],
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let ConfigLoad {
        config, source, ..
    } = match config {
        Some(path) => ConfigLoader::from_env().load_path(&path),
        None => ConfigLoader::load_from_env(),
    }
    .context("failed to load configuration")?;
    tracing::debug!(?source, "configuration loaded");

    let raw = fs::read_to_string(&books_path).with_context(|| {
        format!("failed to read books from {}", books_path.display())
    })?;
    let books: Vec<Book> = serde_json::from_str(&raw).with_context(|| {
        format!("invalid book list in {}", books_path.display())
    })?;

    let mut state = SortState::new();
    for name in toggles {
        let name = attribute_arg(name);
        if name.known().is_none() {
            tracing::warn!(
                attribute = %name,
                "unknown sort attribute; it will sort by title"
            );
        }
        state.toggle(name);
    }

    let view = SortEngine::new(config.sorting).view(&books, state.directives());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view.items)
                .context("failed to encode sorted books")?
        );
    } else {
        print!("{}", render::table(&view));
    }

    Ok(())
}

/// Command-line attribute names ignore case and surrounding spaces.
fn attribute_arg(raw: &str) -> AttributeName {
    let wanted = raw.trim();
    SortAttribute::ALL
        .into_iter()
        .find(|attribute| attribute.id().eq_ignore_ascii_case(wanted))
        .map(AttributeName::Known)
        .unwrap_or_else(|| AttributeName::from(raw))
}
