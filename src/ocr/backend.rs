//! OCR backend abstraction.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;
use thiserror::Error;

use super::pdf_utils;

/// Errors from OCR backends.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Backend not available: {0}")]
    BackendNotAvailable(String),

    #[error("OCR failed: {0}")]
    OcrFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of OCR processing.
#[derive(Debug, Clone)]
pub struct OcrResult {
    /// Extracted text content.
    pub text: String,
    /// Which backend produced this result.
    pub backend: OcrBackendType,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl OcrResult {
    fn timed(text: String, backend: OcrBackendType, start: Instant) -> Self {
        Self {
            text,
            backend,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Available OCR backend types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackendType {
    /// Tesseract OCR via command-line.
    #[default]
    Tesseract,
}

impl OcrBackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OcrBackendType::Tesseract => "tesseract",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tesseract" => Some(OcrBackendType::Tesseract),
            _ => None,
        }
    }
}

impl std::fmt::Display for OcrBackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for OCR backends.
pub trait OcrBackend: Send + Sync {
    /// Get the backend type.
    fn backend_type(&self) -> OcrBackendType;

    /// Check if this backend is available (dependencies installed).
    fn is_available(&self) -> bool;

    /// Get a description of what's needed to make this backend available.
    fn availability_hint(&self) -> String;

    /// Core OCR: extract text from an image file.
    fn run_ocr(&self, image_path: &Path) -> Result<String, OcrError>;

    /// Resolution used when rasterizing PDF pages for this backend.
    fn pdf_dpi(&self) -> u32 {
        pdf_utils::DEFAULT_DPI
    }

    /// Run OCR on an image file, returning a timed result.
    fn ocr_image(&self, image_path: &Path) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        let text = self.run_ocr(image_path)?;
        Ok(OcrResult::timed(text, self.backend_type(), start))
    }

    /// Run OCR on a specific page of a PDF file.
    fn ocr_pdf_page(&self, pdf_path: &Path, page: u32) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        let temp_dir = TempDir::new()?;
        let image_path =
            pdf_utils::pdf_page_to_image(pdf_path, page, self.pdf_dpi(), temp_dir.path())?;
        let text = self.run_ocr(&image_path)?;
        Ok(OcrResult::timed(text, self.backend_type(), start))
    }
}
