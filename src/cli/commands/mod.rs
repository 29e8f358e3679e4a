//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod check;
mod extract;
mod intake;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use letterdesk::config::{load_config, LoadOptions};
use letterdesk::extraction::DateOrder;

#[derive(Parser)]
#[command(name = "letterdesk")]
#[command(about = "Letter intake: OCR and field extraction for incoming correspondence")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true, env = "LETTERDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read ambiguous numeric dates like 12/08/2025 as month/day/year
    #[arg(long, global = true)]
    month_first: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Extract letter fields from already-recognized text
    Extract {
        /// Text file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recognize a scanned letter (image or PDF) and pre-fill a draft
    Intake {
        /// Image (JPEG, PNG, GIF, BMP) or PDF; only the first PDF page is read
        file: PathBuf,
        /// Tesseract language (overrides config, e.g. "eng+swa")
        #[arg(short, long)]
        language: Option<String>,
        /// Print the recognized text as well
        #[arg(long)]
        show_text: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search saved drafts (from `intake --json`) by keyword
    Search {
        /// Matched case-insensitively against title, content, sender and recipient
        term: String,
        /// Draft JSON files to search
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check if required OCR tools are installed
    Check,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&LoadOptions {
        config_path: cli.config.clone(),
    })
    .await?;
    if cli.month_first {
        config.extraction.date_order = DateOrder::MonthFirst;
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Extract { input, json } => extract::cmd_extract(&config, input, json).await,
        Commands::Intake {
            file,
            language,
            show_text,
            json,
        } => {
            if let Some(language) = language {
                config.ocr.language = language;
            }
            intake::cmd_intake(&config, &file, show_text, json).await
        }
        Commands::Search { term, files, json } => search::cmd_search(&term, files, json).await,
        Commands::Check => check::cmd_check(&config),
    }
}
