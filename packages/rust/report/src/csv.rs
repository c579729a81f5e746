//! Semicolon-delimited CSV rendering (spreadsheet-locale compatible).

use crate::ReportEntry;

/// CSV column headers, in output order.
const HEADERS: [&str; 6] = ["ID", "Requirement", "Description", "Clause", "Status", "Comment"];

/// Render entries as a semicolon-delimited CSV: one header row, one data row
/// per entry. Fields containing the delimiter, quotes, or newlines are quoted
/// with doubled inner quotes.
pub fn render_csv(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(";"));
    out.push('\n');

    for entry in entries {
        let fields = [
            entry.id.as_str(),
            entry.requirement.as_str(),
            entry.description.as_str(),
            entry.clause.as_str(),
            entry.status.as_str(),
            entry.comment.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(";"));
        out.push('\n');
    }

    out
}

fn escape_field(field: &str) -> String {
    if field.contains(';') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, comment: &str) -> ReportEntry {
        ReportEntry {
            id: id.into(),
            category: "Scope".into(),
            requirement: "The item boundary shall be defined".into(),
            description: "Boundary documented".into(),
            clause: "Part 3, Clause 5.4.1".into(),
            status: "Pass".into(),
            comment: comment.into(),
            hint: String::new(),
        }
    }

    #[test]
    fn header_plus_one_line_per_entry() {
        let csv = render_csv(&[entry("ITEM_001", "ok"), entry("ITEM_002", "ok")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID;Requirement;Description;Clause;Status;Comment");
        assert!(lines[1].starts_with("ITEM_001;"));
        assert!(lines[2].starts_with("ITEM_002;"));
    }

    #[test]
    fn delimiter_in_field_is_quoted() {
        let csv = render_csv(&[entry("ITEM_001", "found in section 2; see figure 3")]);
        assert!(csv.contains("\"found in section 2; see figure 3\""));
    }

    #[test]
    fn quotes_are_doubled() {
        let csv = render_csv(&[entry("ITEM_001", "the \"item\" scope")]);
        assert!(csv.contains("\"the \"\"item\"\" scope\""));
    }

    #[test]
    fn empty_entries_yield_header_only() {
        let csv = render_csv(&[]);
        assert_eq!(csv, "ID;Requirement;Description;Clause;Status;Comment\n");
    }
}
