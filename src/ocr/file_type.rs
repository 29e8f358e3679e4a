//! Upload type detection.
//!
//! Letters arrive as scanned images or PDFs. The type is sniffed from the
//! file's magic bytes, falling back to the extension when sniffing fails.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Document types accepted for text recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
}

/// MIME types accepted for intake.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "application/pdf",
];

/// Classify a MIME type, or `None` if intake does not accept it.
pub fn document_kind(mime: &str) -> Option<DocumentKind> {
    let mime = mime.split(';').next().unwrap_or(mime).trim().to_lowercase();
    if !SUPPORTED_MIME_TYPES.contains(&mime.as_str()) {
        return None;
    }
    if mime == "application/pdf" {
        Some(DocumentKind::Pdf)
    } else {
        Some(DocumentKind::Image)
    }
}

/// Detect a file's MIME type from content, then from its extension.
pub fn detect_mime_type(path: &Path) -> Option<String> {
    sniff_mime_type(path).or_else(|| mime_from_extension(path).map(str::to_string))
}

fn sniff_mime_type(path: &Path) -> Option<String> {
    // Magic bytes live in the first few KB.
    let mut file = File::open(path).ok()?;
    let mut buffer = [0u8; 8192];
    let bytes_read = file.read(&mut buffer).ok()?;
    if bytes_read == 0 {
        return None;
    }
    infer::get(&buffer[..bytes_read]).map(|kind| kind.mime_type().to_string())
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
