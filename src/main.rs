//! bookgrove CLI: inspect books and their derived views from the terminal.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use bookgrove::config::Config;
use bookgrove::shelf::Shelf;

#[derive(Parser)]
#[command(name = "bookgrove", version, about = "Literary book ingestion and view pipeline")]
struct Cli {
    /// Directory containing book files (html, pdf).
    #[arg(long, global = true, default_value = "books")]
    books_dir: PathBuf,

    /// TOML file replacing the bundled view tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books available on the shelf.
    List,

    /// Show a book's canonical record summary.
    Show {
        /// Book id (file stem).
        id: String,
    },

    /// Print a book's sections under a word budget.
    Sections {
        /// Book id.
        id: String,

        /// Word budget per section.
        #[arg(long, default_value = "500")]
        budget: usize,
    },

    /// Print the world view payload as JSON.
    World {
        /// Book id.
        id: String,
    },

    /// Print the audio view payload as JSON.
    Audio {
        /// Book id.
        id: String,
    },

    /// Print an analysis payload as JSON.
    Analyze {
        /// Book id.
        id: String,

        /// Analysis kind: summary, characters, themes, or style.
        #[arg(long, default_value = "summary")]
        kind: String,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::bundled(),
    };
    let shelf = Shelf::new(&cli.books_dir, config);

    match cli.command {
        Commands::List => {
            let books = shelf.list()?;
            if books.is_empty() {
                println!("No books in {}", cli.books_dir.display());
            }
            for book in books {
                println!("{:<30} {:<6} {}", book.id, book.format.as_str(), book.title);
            }
        }

        Commands::Show { id } => {
            let record = shelf.record(&id)?;
            println!("Title:           {}", record.title);
            println!("Words:           {}", record.word_count);
            println!("Reading time:    {} min", record.reading_minutes);
            println!("Sections:        {}", record.sections.len());
            println!("Cached at:       {}", record.cached_at);
        }

        Commands::Sections { id, budget } => {
            let sections = shelf.sections(&id, budget)?;
            for section in &sections {
                println!("{:>4}. {} ({} words)", section.index, section.title, section.word_count);
            }
            println!("{} sections under a budget of {budget} words", sections.len());
        }

        Commands::World { id } => {
            let payload = shelf.world_view(&id)?;
            println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
        }

        Commands::Audio { id } => {
            let payload = shelf.audio_view(&id)?;
            println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
        }

        Commands::Analyze { id, kind } => {
            let payload = shelf.analysis(&id, &kind)?;
            println!("{}", serde_json::to_string_pretty(&payload).into_diagnostic()?);
        }
    }

    Ok(())
}
