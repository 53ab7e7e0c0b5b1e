//! wordhoard CLI
//!
//! Interactive shell and command-line tools for wordhoard dictionaries.
//!
//! # Commands
//!
//! - `shell` - Menu-driven editing session (default)
//! - `stats` - Display dictionary statistics
//! - `lookup` - Show a word and its definitions
//! - `range` - List the words between two words
//! - `parts` - Show the parts of speech a word uses
//! - `add` - Add a definition and save the file
//! - `verify` - Check that a dictionary file loads and is consistent

mod commands;
mod shell;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordhoard_core::Config;

/// wordhoard dictionary manager.
#[derive(Parser)]
#[command(name = "wordhoard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    /// Create the dictionary file if it does not exist
    #[arg(global = true, long)]
    create: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu
    Shell,

    /// Display dictionary statistics
    Stats {
        /// Output format (text, json)
        #[arg(short = 'o', long, default_value = "text")]
        format: String,
    },

    /// Show a word and its definitions
    Lookup {
        /// The word to look up
        word: String,
    },

    /// List the words between two words, both inclusive
    Range {
        /// First word of the range
        start: String,
        /// Last word of the range
        end: String,
    },

    /// Show the parts of speech a word uses
    Parts {
        /// The word to summarize
        word: String,
    },

    /// Add a definition and save the file
    Add {
        /// The word
        word: String,
        /// Part of speech (noun, verb, adj, adv, pron, prep, conj, interj)
        part_of_speech: String,
        /// Definition text
        text: String,
    },

    /// Check that a dictionary file loads and is consistent
    Verify,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with menu output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new().create_if_missing(cli.create);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            commands::shell::run(cli.file.as_deref(), config)?;
        }
        Commands::Stats { format } => {
            let path = cli.file.ok_or("Dictionary file required for stats")?;
            commands::stats::run(&path, config, &format)?;
        }
        Commands::Lookup { word } => {
            let path = cli.file.ok_or("Dictionary file required for lookup")?;
            commands::lookup::run(&path, config, &word)?;
        }
        Commands::Range { start, end } => {
            let path = cli.file.ok_or("Dictionary file required for range")?;
            commands::range::run(&path, config, &start, &end)?;
        }
        Commands::Parts { word } => {
            let path = cli.file.ok_or("Dictionary file required for parts")?;
            commands::parts::run(&path, config, &word)?;
        }
        Commands::Add {
            word,
            part_of_speech,
            text,
        } => {
            let path = cli.file.ok_or("Dictionary file required for add")?;
            commands::add::run(&path, config, &word, &part_of_speech, &text)?;
        }
        Commands::Verify => {
            let path = cli.file.ok_or("Dictionary file required for verify")?;
            commands::verify::run(&path, config)?;
        }
        Commands::Version => {
            println!("wordhoard CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("wordhoard core v{}", wordhoard_core::VERSION);
        }
    }

    Ok(())
}
