//! PDF-to-image conversion for OCR backends.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::backend::OcrError;
use super::tools::PDFTOPPM_NOT_FOUND;

/// Rasterization resolution that works well for Tesseract.
pub const DEFAULT_DPI: u32 = 300;

/// Convert a PDF page to a PNG using pdftoppm.
pub fn pdf_page_to_image(
    pdf_path: &Path,
    page: u32,
    dpi: u32,
    output_dir: &Path,
) -> Result<PathBuf, OcrError> {
    let page_str = page.to_string();
    let dpi_str = dpi.to_string();
    let output_prefix = output_dir.join("page");

    tracing::debug!(pdf = %pdf_path.display(), page, dpi, "rasterizing PDF page");

    let status = Command::new("pdftoppm")
        .args(["-png", "-r", &dpi_str, "-f", &page_str, "-l", &page_str])
        .arg(pdf_path)
        .arg(&output_prefix)
        .status();

    match status {
        Ok(s) if s.success() => find_page_image(output_dir, page)
            .ok_or_else(|| OcrError::OcrFailed(format!("No image generated for page {}", page))),
        Ok(_) => Err(OcrError::OcrFailed(
            "pdftoppm failed to convert PDF page".to_string(),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::BackendNotAvailable(
            PDFTOPPM_NOT_FOUND.to_string(),
        )),
        Err(e) => Err(OcrError::Io(e)),
    }
}

/// Find the image file for a specific page number.
///
/// pdftoppm pads page numbers to the width of the total page count, so
/// page 1 may be `page-1.png`, `page-01.png`, `page-001.png`, ...
pub fn find_page_image(dir: &Path, page_num: u32) -> Option<PathBuf> {
    (1..=4)
        .map(|digits| dir.join(format!("page-{:0width$}.png", page_num, width = digits)))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_page_image_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(find_page_image(temp.path(), 1).is_none());
    }

    #[test]
    fn test_find_page_image_with_2_digit_padding() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page-01.png");
        std::fs::write(&path, b"fake png").unwrap();

        assert_eq!(find_page_image(temp.path(), 1), Some(path));
    }

    #[test]
    fn test_find_page_image_unpadded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page-1.png");
        std::fs::write(&path, b"fake png").unwrap();

        assert_eq!(find_page_image(temp.path(), 1), Some(path));
    }
}
