//! booktrack CLI
//!
//! Command-line front end over a file-backed slot.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use booktrack::view::{Notice, Presenter};
use booktrack::{BookDraft, Config, Controller, FileSlot, Library, Outcome};

/// booktrack CLI
#[derive(Parser, Debug)]
#[command(name = "booktrack")]
#[command(about = "Track finished and unfinished books")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./booktrack_data")]
    data_dir: String,

    /// Storage key (file name inside the data directory)
    #[arg(short, long, default_value = "books")]
    key: String,

    /// Do not write the sample books into an empty data directory
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show both lists
    List {
        /// Only show books whose title or author/year contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a book
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        author: String,

        #[arg(short, long)]
        year: String,

        /// Mark the book as finished
        #[arg(short, long)]
        complete: bool,
    },

    /// Edit a book, unspecified fields keep their value
    Edit {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        #[arg(short, long)]
        complete: Option<bool>,
    },

    /// Move a book between finished and unfinished
    Move { id: i64 },

    /// Delete a book
    Delete {
        id: i64,

        /// Confirmation text, prompted for when omitted
        #[arg(long)]
        confirm: Option<String>,
    },
}

/// Prints notices and reads prompts from stdin
struct TerminalPresenter {
    preset_reply: Option<String>,
}

impl Presenter for TerminalPresenter {
    fn notify(&mut self, notice: &Notice) {
        println!("{}", notice);
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        if let Some(reply) = self.preset_reply.take() {
            return Some(reply);
        }

        print!("{}: ", message);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn scroll_to_top(&mut self) {}
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,booktrack=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .storage_key(&args.key)
        .seed_on_first_load(!args.no_seed)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    let slot = match FileSlot::open(&config.data_dir) {
        Ok(slot) => slot,
        Err(e) => {
            tracing::error!("Failed to open data directory: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("booktrack v{} using {}", booktrack::VERSION, slot.path_for(&config.storage_key).display());

    let preset_reply = match &args.command {
        Commands::Delete { confirm, .. } => confirm.clone(),
        _ => None,
    };

    let library = Library::with_key(slot, config.storage_key.clone());
    let mut controller = Controller::new(config, library, TerminalPresenter { preset_reply });
    controller.start();

    let result = match args.command {
        Commands::List { search } => {
            if let Some(query) = search {
                controller.search(&query);
            }
            print!("{}", controller.shelf());
            Ok(Outcome::Done)
        }
        Commands::Add {
            title,
            author,
            year,
            complete,
        } => {
            controller.form_mut().fill(BookDraft {
                title,
                author,
                year,
                is_complete: complete,
            });
            controller.submit()
        }
        Commands::Edit {
            id,
            title,
            author,
            year,
            complete,
        } => controller.begin_edit(id).and_then(|()| {
            let form = controller.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(author) = author {
                form.author = author;
            }
            if let Some(year) = year {
                form.year = year;
            }
            if let Some(complete) = complete {
                form.is_complete = complete;
            }
            controller.submit()
        }),
        Commands::Move { id } => controller.move_book(id),
        Commands::Delete { id, .. } => controller.delete_book(id),
    };

    match result {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Aborted) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
