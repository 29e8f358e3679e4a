//! Keyword search over saved letter drafts.

use std::path::{Path, PathBuf};

use console::style;

use letterdesk::models::{search_letters, LetterDraft};

use crate::cli::helpers::truncate;

/// Load a draft from `intake --json` output or a bare draft file.
async fn load_draft(path: &Path) -> anyhow::Result<LetterDraft> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let mut value: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Invalid JSON in {}: {}", path.display(), e))?;

    let draft = match value.get_mut("draft") {
        Some(nested) => nested.take(),
        None => value,
    };
    Ok(serde_json::from_value(draft)?)
}

pub async fn cmd_search(term: &str, files: Vec<PathBuf>, json: bool) -> anyhow::Result<()> {
    let mut letters = Vec::with_capacity(files.len());
    let mut sources = Vec::with_capacity(files.len());
    for file in files {
        match load_draft(&file).await {
            Ok(draft) => {
                letters.push(draft);
                sources.push(file);
            }
            Err(e) => tracing::warn!("Skipping {}: {}", file.display(), e),
        }
    }

    let matches = search_letters(&letters, term);
    tracing::info!(term, searched = letters.len(), found = matches.len(), "search complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{} No letters match \"{}\"", style("!").yellow(), term);
        return Ok(());
    }

    for (letter, source) in letters.iter().zip(&sources) {
        if !letter.matches_search(term) {
            continue;
        }
        println!(
            "  {} {:<40} {:<25} {}",
            letter.date_received.format("%Y-%m-%d"),
            truncate(&letter.title, 40),
            truncate(&letter.sender_name, 25),
            style(source.display()).dim()
        );
    }
    println!("\n{} of {} letters match", matches.len(), letters.len());
    Ok(())
}
