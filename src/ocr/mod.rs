//! Text recognition for scanned letters.
//!
//! Recognizes text from uploaded documents using:
//! - Tesseract OCR for image files
//! - pdftoppm (Poppler) to rasterize PDF pages before OCR
//!
//! Only the recognized text leaves this module; field extraction lives in
//! `crate::extraction`.

mod backend;
mod file_type;
mod pdf_utils;
mod tesseract;
mod tools;

pub use backend::{OcrBackend, OcrBackendType, OcrError, OcrResult};
pub use file_type::{detect_mime_type, document_kind, DocumentKind, SUPPORTED_MIME_TYPES};
pub use pdf_utils::{find_page_image, pdf_page_to_image, DEFAULT_DPI};
pub use tesseract::TesseractBackend;
pub use tools::{check_binary, check_pdftoppm_hint, check_tools};
