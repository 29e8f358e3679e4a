//! External tool discovery.

pub const TESSERACT_NOT_FOUND: &str = "tesseract not found (install tesseract-ocr)";
pub const PDFTOPPM_NOT_FOUND: &str = "pdftoppm not found (install poppler-utils)";

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Hint for PDF support when pdftoppm is missing.
pub fn check_pdftoppm_hint() -> Option<String> {
    if check_binary("pdftoppm") {
        None
    } else {
        Some("PDF input needs pdftoppm. Install with: apt install poppler-utils".to_string())
    }
}

/// Availability of every external tool intake relies on.
pub fn check_tools() -> Vec<(&'static str, bool)> {
    ["tesseract", "pdftoppm"]
        .into_iter()
        .map(|tool| (tool, check_binary(tool)))
        .collect()
}
