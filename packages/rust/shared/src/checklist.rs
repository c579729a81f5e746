//! Checklist store: loads the review checklist JSON from disk.

use std::path::Path;

use crate::error::{ItemCheckError, Result};
use crate::types::Checklist;

/// Default checklist location relative to the working directory.
pub const DEFAULT_CHECKLIST_PATH: &str = "checklists/item_definition_checklist.json";

/// Load the checklist from a JSON file.
///
/// Fails with [`ItemCheckError::ChecklistNotFound`] if the file is absent and
/// [`ItemCheckError::ChecklistCorrupt`] if the JSON cannot be parsed. Items
/// are not schema-validated beyond presence; missing keys default downstream.
pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ItemCheckError::ChecklistNotFound { path: path.into() }
        } else {
            ItemCheckError::io(path, e)
        }
    })?;

    let checklist: Checklist = serde_json::from_str(&content).map_err(|e| {
        ItemCheckError::ChecklistCorrupt {
            message: e.to_string(),
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        items = checklist.len(),
        "checklist loaded"
    );

    Ok(checklist)
}
