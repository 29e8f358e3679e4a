//! OCR tool availability check.

use console::style;

use letterdesk::config::Config;
use letterdesk::ocr::{check_tools, OcrBackend, TesseractBackend};

pub fn cmd_check(config: &Config) -> anyhow::Result<()> {
    println!("\n{}", style("OCR Tool Status").bold());
    println!("{}", "-".repeat(50));

    println!("\n{}", style("Tools:").cyan());
    let mut all_found = true;
    for (tool, available) in check_tools() {
        let status = if available {
            style("✓ found").green()
        } else {
            all_found = false;
            style("✗ not found").red()
        };
        println!("  {:<15} {}", tool, status);
    }

    println!("\n{}", style("OCR Backend:").cyan());
    let tesseract = TesseractBackend::with_settings(config.ocr.clone());
    let status = if tesseract.is_available() {
        style("✓ available").green()
    } else {
        style("✗ not available").red()
    };
    println!("  {:<15} {}", "Tesseract", status);
    println!("                  {}", style(tesseract.availability_hint()).dim());
    println!("  {:<15} {}", "Language", tesseract.language());
    println!("  {:<15} {}", "PDF DPI", config.ocr.pdf_dpi);
    println!(
        "  {:<15} {}",
        "Date order",
        config.extraction.date_order.as_str()
    );

    if !all_found {
        println!(
            "\n{}",
            style("Text extraction from plain text still works without these tools.").dim()
        );
    }
    Ok(())
}
