//! Scanned-letter intake command.

use std::path::Path;

use console::style;

use letterdesk::config::Config;
use letterdesk::services::IntakeService;

use crate::cli::helpers::{print_draft, print_extraction};

pub async fn cmd_intake(
    config: &Config,
    file: &Path,
    show_text: bool,
    json: bool,
) -> anyhow::Result<()> {
    let service = IntakeService::from_config(config);
    let outcome = service.intake_file(file).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {} ({}, {}, {} ms)",
        style("✓").green(),
        file.display(),
        outcome.mime_type.as_deref().unwrap_or("unknown"),
        outcome
            .ocr_backend
            .map(|b| b.as_str())
            .unwrap_or("no OCR"),
        outcome.ocr_time_ms.unwrap_or(0)
    );

    if show_text {
        println!("\n{}", style("Recognized Text").bold());
        println!("{}", "-".repeat(50));
        println!("{}", outcome.text.trim());
    }

    print_extraction(&outcome.extraction);
    print_draft(&outcome.draft);
    println!(
        "\n{}",
        style("Review and correct the draft before submitting.").dim()
    );
    Ok(())
}
