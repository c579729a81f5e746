//! Document text extraction for item definition reviews.
//!
//! Supports `.txt`, `.pdf`, and `.docx` inputs. Unsupported extensions yield
//! empty text rather than an error; callers must treat blank output as
//! "no content found".

mod docx;
mod pdf;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use itemcheck_shared::{ItemCheckError, Result};

pub use docx::extract_docx;
pub use pdf::extract_pdf;

/// Declared kind of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Docx,
}

impl FileKind {
    /// Map a path's extension to a supported kind, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extract the textual content of a document of a declared kind.
///
/// Plain-text read failures are I/O errors; PDF and DOCX extraction failures
/// degrade to empty text (logged, non-fatal) so the caller's blank-content
/// check produces the user-facing guidance.
pub fn extract(path: &Path, kind: FileKind) -> Result<String> {
    let content = match kind {
        FileKind::Text => {
            std::fs::read_to_string(path).map_err(|e| ItemCheckError::io(path, e))?
        }
        FileKind::Pdf => extract_pdf(path),
        FileKind::Docx => extract_docx(path),
    };

    debug!(
        path = %path.display(),
        kind = ?kind,
        chars = content.len(),
        "document extracted"
    );

    Ok(content)
}

/// Extract a document, dispatching on its file extension.
///
/// Unsupported extensions yield an empty string, not an error.
pub fn extract_path(path: &Path) -> Result<String> {
    match FileKind::from_path(path) {
        Some(kind) => extract(path, kind),
        None => {
            warn!(path = %path.display(), "unsupported file extension, skipping");
            Ok(String::new())
        }
    }
}

/// List all reviewable documents in a folder, sorted lexicographically by
/// filename.
///
/// The source system's first-match-wins behavior depended on unspecified
/// directory iteration order; sorting makes the selection deterministic.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ItemCheckError::io(dir, e))?;

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ItemCheckError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && FileKind::from_path(&path).is_some() {
            candidates.push(path);
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}

/// Pick the first reviewable document in a folder (lexicographic order), if any.
pub fn find_document(dir: &Path) -> Result<Option<PathBuf>> {
    Ok(find_documents(dir)?.into_iter().next())
}
