//! Letter intake: recognize an uploaded document and pre-fill a draft.
//!
//! One uploaded document goes through type detection, OCR of its first page,
//! field extraction, and a merge into a fresh `LetterDraft`. The draft is the
//! only thing meant to outlive the call; the raw extraction is returned for
//! display and then discarded.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::extraction::{ExtractionResult, FieldExtractor, PatternFieldExtractor};
use crate::models::LetterDraft;
use crate::ocr::{
    detect_mime_type, document_kind, DocumentKind, OcrBackend, OcrBackendType, OcrError,
    OcrResult, TesseractBackend,
};

/// Only the first page of a PDF is recognized.
const INTAKE_PDF_PAGE: u32 = 1;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported document type {mime} (expected JPEG, PNG, GIF, BMP or PDF)")]
    UnsupportedType { mime: String },

    #[error("OCR backend not available: {0}")]
    BackendNotAvailable(String),

    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error("No text could be recognized in {0}")]
    NoText(PathBuf),

    #[error("OCR task failed: {0}")]
    Task(String),
}

/// Everything produced for one document.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub text: String,
    pub extraction: ExtractionResult,
    pub draft: LetterDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_backend: Option<OcrBackendType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_time_ms: Option<u64>,
}

pub struct IntakeService {
    backend: Arc<dyn OcrBackend>,
    extractor: Box<dyn FieldExtractor>,
}

impl IntakeService {
    pub fn new(config: &Config, backend: Arc<dyn OcrBackend>) -> Self {
        Self {
            backend,
            extractor: Box::new(PatternFieldExtractor::with_date_order(
                config.extraction.date_order,
            )),
        }
    }

    /// Service backed by Tesseract with the configured OCR settings.
    pub fn from_config(config: &Config) -> Self {
        let backend = TesseractBackend::with_settings(config.ocr.clone());
        Self::new(config, Arc::new(backend))
    }

    /// Extract fields from text that was already recognized (or typed).
    pub fn intake_text(&self, text: &str) -> IntakeOutcome {
        let extraction = self.extractor.extract(text);
        let mut draft = LetterDraft::new().with_content(text);
        draft.apply_extraction(&extraction);

        IntakeOutcome {
            source: None,
            mime_type: None,
            text: text.to_string(),
            extraction,
            draft,
            ocr_backend: None,
            ocr_time_ms: None,
        }
    }

    /// Recognize a scanned letter and pre-fill a draft from it.
    pub async fn intake_file(&self, path: &Path) -> Result<IntakeOutcome, IntakeError> {
        if !path.is_file() {
            return Err(IntakeError::NotFound(path.to_path_buf()));
        }

        let mime = detect_mime_type(path);
        let kind = mime
            .as_deref()
            .and_then(document_kind)
            .ok_or_else(|| IntakeError::UnsupportedType {
                mime: mime.clone().unwrap_or_else(|| "unknown".to_string()),
            })?;

        tracing::info!(
            file = %path.display(),
            mime = mime.as_deref().unwrap_or("unknown"),
            "starting intake"
        );

        let ocr = self.recognize(path, kind).await?;
        if ocr.text.trim().is_empty() {
            tracing::warn!(file = %path.display(), "OCR produced no text");
            return Err(IntakeError::NoText(path.to_path_buf()));
        }

        let mut outcome = self.intake_text(&ocr.text);
        outcome.draft.extracted_from_image = true;
        outcome.source = Some(path.to_path_buf());
        outcome.mime_type = mime;
        outcome.ocr_backend = Some(ocr.backend);
        outcome.ocr_time_ms = Some(ocr.processing_time_ms);

        tracing::info!(
            file = %path.display(),
            fields = outcome.extraction.found_count(),
            urgency = %outcome.extraction.urgency,
            ocr_ms = ocr.processing_time_ms,
            "intake complete"
        );
        Ok(outcome)
    }

    /// Run OCR off the async runtime; backends shell out and block.
    async fn recognize(&self, path: &Path, kind: DocumentKind) -> Result<OcrResult, IntakeError> {
        if !self.backend.is_available() {
            return Err(IntakeError::BackendNotAvailable(
                self.backend.availability_hint(),
            ));
        }

        let backend = Arc::clone(&self.backend);
        let path = path.to_path_buf();
        let result = tokio::task::spawn_blocking(move || match kind {
            DocumentKind::Pdf => backend.ocr_pdf_page(&path, INTAKE_PDF_PAGE),
            DocumentKind::Image => backend.ocr_image(&path),
        })
        .await
        .map_err(|e| IntakeError::Task(e.to_string()))??;

        Ok(result)
    }
}
