//! Tesseract OCR backend.
//!
//! Runs the `tesseract` command-line tool and reads the text from stdout.

use std::path::Path;
use std::process::Command;

use super::backend::{OcrBackend, OcrBackendType, OcrError};
use super::tools::{check_binary, check_pdftoppm_hint, TESSERACT_NOT_FOUND};
use crate::config::OcrSettings;

/// Tesseract OCR backend.
pub struct TesseractBackend {
    settings: OcrSettings,
}

impl TesseractBackend {
    /// Create a new Tesseract backend with default settings.
    pub fn new() -> Self {
        Self {
            settings: OcrSettings::default(),
        }
    }

    /// Create a new Tesseract backend with custom settings.
    pub fn with_settings(settings: OcrSettings) -> Self {
        Self { settings }
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrBackend for TesseractBackend {
    fn backend_type(&self) -> OcrBackendType {
        OcrBackendType::Tesseract
    }

    fn is_available(&self) -> bool {
        check_binary("tesseract")
    }

    fn availability_hint(&self) -> String {
        if !check_binary("tesseract") {
            "Tesseract not installed. Install with: apt install tesseract-ocr".to_string()
        } else if let Some(hint) = check_pdftoppm_hint() {
            hint
        } else {
            "Tesseract is available".to_string()
        }
    }

    fn pdf_dpi(&self) -> u32 {
        self.settings.pdf_dpi
    }

    fn run_ocr(&self, image_path: &Path) -> Result<String, OcrError> {
        tracing::debug!(
            image = %image_path.display(),
            language = %self.settings.language,
            "running tesseract"
        );

        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.settings.language])
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(OcrError::OcrFailed(format!("tesseract failed: {}", stderr)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                OcrError::BackendNotAvailable(TESSERACT_NOT_FOUND.to_string()),
            ),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_are_used() {
        let backend = TesseractBackend::with_settings(OcrSettings {
            language: "fra".to_string(),
            pdf_dpi: 200,
        });
        assert_eq!(backend.language(), "fra");
        assert_eq!(backend.pdf_dpi(), 200);
        assert_eq!(backend.backend_type(), OcrBackendType::Tesseract);
    }

    #[test]
    fn test_default_language() {
        assert_eq!(TesseractBackend::new().language(), "eng");
    }
}
