//! Word document rendering via docx-rs.

use docx_rs::{
    Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow, WidthType,
};

use itemcheck_shared::{ItemCheckError, Result};

use crate::ReportEntry;

const TITLE: &str = "ISO 26262 Part 3 - Item Definition Review Report";

/// Render entries into a Word document.
///
/// Layout: a document title, then per entry a category heading (emitted only
/// when the category differs from the previous entry's), a level-3 item-id
/// heading, a fixed 5-row key/value table, and a spacer paragraph. Entries
/// with interleaved categories repeat their headings; rows are rendered in
/// the order given, never re-sorted.
pub fn render_docx(entries: &[ReportEntry]) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "Heading 1", 32))
        .add_style(heading_style("Heading2", "Heading 2", 26))
        .add_style(heading_style("Heading3", "Heading 3", 22))
        .add_paragraph(heading(TITLE, "Heading1"));

    // Heading latch is scoped to this call; each render starts fresh.
    let mut last_category: Option<&str> = None;

    for entry in entries {
        if last_category != Some(entry.category.as_str()) {
            docx = docx.add_paragraph(heading(&entry.category, "Heading2"));
            last_category = Some(entry.category.as_str());
        }

        docx = docx
            .add_paragraph(heading(&entry.id, "Heading3"))
            .add_table(item_table(entry))
            .add_paragraph(Paragraph::new());
    }

    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ItemCheckError::report(format!("failed to pack docx: {e}")))?;

    Ok(cursor.into_inner())
}

fn heading_style(id: &str, name: &str, size: usize) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(size)
        .bold()
}

fn heading(text: &str, style: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style)
}

fn item_table(entry: &ReportEntry) -> Table {
    let mut comment = entry.comment.clone();
    if !entry.hint.is_empty() {
        if !comment.is_empty() {
            comment.push(' ');
        }
        comment.push_str(&format!("Hint for improvement: {}", entry.hint));
    }

    let rows = vec![
        kv_row("Requirement", &entry.requirement),
        kv_row("Description", &entry.description),
        kv_row("ISO Clause", &entry.clause),
        kv_row("Result", &entry.status),
        kv_row("Comment", &comment),
    ];

    Table::new(rows).set_grid(vec![2400, 6960])
}

fn kv_row(label: &str, value: &str) -> TableRow {
    TableRow::new(vec![
        TableCell::new()
            .width(2400, WidthType::Dxa)
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(label).bold())),
        TableCell::new()
            .width(6960, WidthType::Dxa)
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(value))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: &str) -> ReportEntry {
        ReportEntry {
            id: id.into(),
            category: category.into(),
            requirement: "req".into(),
            description: "desc".into(),
            clause: "Part 3, Clause 5".into(),
            status: "Pass".into(),
            comment: "ok".into(),
            hint: String::new(),
        }
    }

    #[test]
    fn renders_nonempty_docx_bytes() {
        let bytes = render_docx(&[entry("ITEM_001", "Scope")]).unwrap();
        // A .docx is a ZIP archive; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_entries_still_render_title_document() {
        let bytes = render_docx(&[]).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn interleaved_categories_render() {
        // Headings repeat when categories interleave; rendering must not
        // re-sort or fail.
        let entries = vec![
            entry("ITEM_001", "Scope"),
            entry("ITEM_002", "Interfaces"),
            entry("ITEM_003", "Scope"),
        ];
        let bytes = render_docx(&entries).unwrap();
        assert!(!bytes.is_empty());
    }
}
