//! PDF text extraction.
//!
//! Extracts text from digital-native PDFs via the `pdf-extract` crate.
//! Scanned (image-only) documents yield empty or minimal content; no OCR.

use std::fs;
use std::path::Path;

use tracing::warn;

/// Extract plain text from a PDF file.
///
/// Extraction failures degrade to an empty string with a warning; a partially
/// malformed document is not fatal to the review.
pub fn extract_pdf(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read pdf file");
            return String::new();
        }
    };

    match pdf_extract::extract_text_from_mem(&bytes) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "pdf extraction failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_degrades_to_empty() {
        assert_eq!(extract_pdf(Path::new("/nonexistent/file.pdf")), "");
    }

    #[test]
    fn garbage_bytes_degrade_to_empty() {
        let path = std::env::temp_dir().join(format!(
            "itemcheck-pdf-garbage-{}.pdf",
            uuid::Uuid::now_v7()
        ));
        fs::write(&path, b"not a pdf").unwrap();
        assert_eq!(extract_pdf(&path), "");

        let _ = fs::remove_file(&path);
    }
}
