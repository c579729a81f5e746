//! In-memory ZIP packaging and exports-directory persistence.

use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use itemcheck_shared::{ItemCheckError, Result};

use crate::ReportBundle;

/// A packaged review archive: the ZIP bytes plus the metadata the caller
/// reports (archive name, content checksum).
#[derive(Debug, Clone)]
pub struct ZipBundle {
    /// Archive filename, e.g. `item_definition_review_20260823_141530.zip`.
    pub filename: String,
    pub bytes: Vec<u8>,
    /// SHA-256 of the archive bytes, hex-encoded.
    pub sha256: String,
}

impl ZipBundle {
    /// Base64-encode the archive for inline reply payloads.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Zip the report's two files into an in-memory archive named with the
/// current local timestamp.
pub fn bundle(report: &ReportBundle) -> Result<ZipBundle> {
    bundle_at(report, Local::now())
}

/// Zip the report at an explicit timestamp. Entry names and the archive name
/// share the same `item_definition_review_<YYYYmmdd_HHMMSS>` stem.
pub fn bundle_at(report: &ReportBundle, stamp: DateTime<Local>) -> Result<ZipBundle> {
    let stem = format!("item_definition_review_{}", stamp.format("%Y%m%d_%H%M%S"));

    let zip_err = |e: zip::result::ZipError| ItemCheckError::report(format!("zip write failed: {e}"));
    let io_err = |e: std::io::Error| ItemCheckError::report(format!("zip write failed: {e}"));

    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(format!("{stem}.docx"), options).map_err(zip_err)?;
    writer.write_all(&report.docx).map_err(io_err)?;

    writer.start_file(format!("{stem}.csv"), options).map_err(zip_err)?;
    writer.write_all(report.csv.as_bytes()).map_err(io_err)?;

    let bytes = writer.finish().map_err(zip_err)?.into_inner();
    let sha256 = format!("{:x}", Sha256::digest(&bytes));

    tracing::debug!(archive = %stem, bytes = bytes.len(), "review bundle packed");

    Ok(ZipBundle {
        filename: format!("{stem}.zip"),
        bytes,
        sha256,
    })
}

/// Persist the archive under the exports directory, creating it on demand.
/// Returns the written path. Exports are append-only audit artifacts; nothing
/// reads them back.
pub fn write_export(dir: &Path, bundle: &ZipBundle) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| ItemCheckError::io(dir, e))?;

    let path = dir.join(&bundle.filename);
    std::fs::write(&path, &bundle.bytes).map_err(|e| ItemCheckError::io(&path, e))?;

    tracing::info!(path = %path.display(), "review bundle exported");
    Ok(path)
}
