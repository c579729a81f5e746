//! Report assembly: joins parsed review rows with checklist metadata and
//! renders the Word + CSV outputs, bundled into a timestamp-named ZIP.

mod bundle;
mod csv;
mod docx;

use itemcheck_shared::{Checklist, Result, ReviewRow};

pub use bundle::{bundle, write_export, ZipBundle};
pub use csv::render_csv;
pub use docx::render_docx;

/// Fallback category for rows whose id has no checklist match.
pub const UNCATEGORIZED: &str = "Uncategorized";

// ---------------------------------------------------------------------------
// Joined view
// ---------------------------------------------------------------------------

/// One review row joined with its checklist item, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: String,
    pub category: String,
    pub requirement: String,
    pub description: String,
    pub clause: String,
    pub status: String,
    pub comment: String,
    pub hint: String,
}

/// Join review rows with checklist metadata by item id.
///
/// A row whose id has no checklist match falls back to the
/// "Uncategorized" category, the row's own requirement echo, an empty
/// description, and an "N/A" clause. Never fatal: the model may omit or
/// hallucinate ids and the report still renders.
pub fn join_rows(rows: &[ReviewRow], checklist: &Checklist) -> Vec<ReportEntry> {
    let items = checklist.item_map();

    rows.iter()
        .map(|row| match items.get(row.id.as_str()) {
            Some(item) => ReportEntry {
                id: row.id.clone(),
                category: if item.category.is_empty() {
                    UNCATEGORIZED.to_string()
                } else {
                    item.category.clone()
                },
                requirement: if item.requirement.is_empty() {
                    row.requirement.clone()
                } else {
                    item.requirement.clone()
                },
                description: item.description.clone(),
                clause: if item.iso_clause.is_empty() {
                    "N/A".to_string()
                } else {
                    item.iso_clause.clone()
                },
                status: row.status.clone(),
                comment: row.comment.clone(),
                hint: row.hint.clone(),
            },
            None => ReportEntry {
                id: row.id.clone(),
                category: UNCATEGORIZED.to_string(),
                requirement: row.requirement.clone(),
                description: String::new(),
                clause: "N/A".to_string(),
                status: row.status.clone(),
                comment: row.comment.clone(),
                hint: row.hint.clone(),
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// The two rendered report files, not yet zipped.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub docx: Vec<u8>,
    pub csv: String,
}

/// Render parsed review rows into the Word document and CSV.
pub fn assemble(rows: &[ReviewRow], checklist: &Checklist) -> Result<ReportBundle> {
    let entries = join_rows(rows, checklist);

    let docx = render_docx(&entries)?;
    let csv = render_csv(&entries);

    tracing::debug!(
        entries = entries.len(),
        docx_bytes = docx.len(),
        csv_bytes = csv.len(),
        "report assembled"
    );

    Ok(ReportBundle { docx, csv })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemcheck_shared::{ChecklistItem, Record};

    fn checklist() -> Checklist {
        Checklist {
            items: vec![
                ChecklistItem {
                    id: "ITEM_001".into(),
                    category: "Scope".into(),
                    requirement: "The item boundary shall be defined".into(),
                    description: "Boundary and context documented".into(),
                    iso_clause: "Part 3, Clause 5.4.1".into(),
                },
                ChecklistItem {
                    id: "ITEM_002".into(),
                    category: "Interfaces".into(),
                    requirement: "External interfaces shall be listed".into(),
                    description: "Interface inventory present".into(),
                    iso_clause: "Part 3, Clause 5.4.2".into(),
                },
            ],
        }
    }

    fn row(id: &str, status: &str) -> ReviewRow {
        let mut record = Record::new();
        record.insert("ID".into(), id.into());
        record.insert("Status".into(), status.into());
        record.insert("Comment".into(), format!("comment for {id}"));
        ReviewRow::from_record(&record)
    }

    #[test]
    fn join_pulls_checklist_metadata() {
        let entries = join_rows(&[row("ITEM_001", "Pass")], &checklist());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, "Scope");
        assert_eq!(entries[0].requirement, "The item boundary shall be defined");
        assert_eq!(entries[0].clause, "Part 3, Clause 5.4.1");
        assert_eq!(entries[0].status, "Pass");
    }

    #[test]
    fn unknown_id_falls_back_to_uncategorized() {
        let entries = join_rows(&[row("ITEM_999", "Fail")], &checklist());
        assert_eq!(entries[0].category, UNCATEGORIZED);
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[0].clause, "N/A");
    }

    #[test]
    fn duplicate_checklist_ids_resolve_to_last() {
        let mut list = checklist();
        list.items.push(ChecklistItem {
            id: "ITEM_001".into(),
            category: "Revised".into(),
            requirement: "Revised requirement".into(),
            description: String::new(),
            iso_clause: "Part 3, Clause 9".into(),
        });

        let entries = join_rows(&[row("ITEM_001", "Pass")], &list);
        assert_eq!(entries[0].category, "Revised");
        assert_eq!(entries[0].requirement, "Revised requirement");
    }

    #[test]
    fn assemble_produces_both_outputs() {
        let rows = vec![row("ITEM_001", "Pass"), row("ITEM_002", "Fail")];
        let report = assemble(&rows, &checklist()).unwrap();
        assert!(!report.docx.is_empty());
        assert!(report.csv.starts_with("ID;Requirement;Description;Clause;Status;Comment"));
    }
}
