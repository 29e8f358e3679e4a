//! Field extraction from text files or stdin.

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use letterdesk::config::Config;
use letterdesk::extraction::{FieldExtractor, PatternFieldExtractor};

use crate::cli::helpers::print_extraction;

/// Read input text; OCR output is not guaranteed to be valid UTF-8.
async fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => tokio::fs::read(path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read {}: {}", path.display(), e)
        })?,
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn cmd_extract(
    config: &Config,
    input: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let text = read_input(input.as_deref()).await?;
    let extractor = PatternFieldExtractor::with_date_order(config.extraction.date_order);
    tracing::debug!(
        backend = extractor.backend_id(),
        date_order = extractor.date_order().as_str(),
        bytes = text.len(),
        "extracting fields"
    );
    let result = extractor.extract(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_extraction(&result);
    }
    Ok(())
}
