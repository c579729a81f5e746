//! Markdown-table parser for LLM replies.
//!
//! Detects pipe-delimited tables anywhere in free-form text and turns each
//! data row into a header-keyed record.

use itemcheck_shared::Record;

/// Parse all markdown tables in `text` into records, in appearance order.
///
/// A table is a contiguous run of lines: a `|`-delimited header row, a
/// separator row of dashes/colons, then one or more data rows. Rows whose
/// cells are all empty after trimming are dropped. Header names and cells are
/// zipped positionally: short rows leave trailing columns unset, long rows
/// drop excess cells.
pub fn parse_tables(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut records = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        // A table needs header + separator + at least one data row.
        if i + 2 < lines.len()
            && is_table_row(lines[i])
            && is_separator_row(lines[i + 1])
            && is_table_row(lines[i + 2])
        {
            let headers = split_row(lines[i]);

            let mut j = i + 2;
            while j < lines.len() && is_table_row(lines[j]) && !is_separator_row(lines[j]) {
                let cells = split_row(lines[j]);
                if cells.iter().any(|c| !c.is_empty()) {
                    let record: Record = headers.iter().cloned().zip(cells).collect();
                    records.push(record);
                }
                j += 1;
            }
            i = j;
        } else {
            i += 1;
        }
    }

    tracing::debug!(rows = records.len(), "markdown tables parsed");
    records
}

/// A pipe-delimited table row: starts with `|` and has at least two pipes.
fn is_table_row(line: &str) -> bool {
    line.starts_with('|') && line.matches('|').count() >= 2
}

/// A separator row: pipe-delimited cells of dashes/colons only, each cell
/// containing at least one dash or colon.
fn is_separator_row(line: &str) -> bool {
    if !is_table_row(line) {
        return false;
    }
    let cells = split_row(line);
    !cells.is_empty()
        && cells.iter().all(|c| {
            !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':')
        })
}

/// Split a row into cells: trim the surrounding pipes, then trim each cell.
fn split_row(line: &str) -> Vec<String> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_table_single_row() {
        let text = "| A | B |\n|---|---|\n| x | y |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "x");
        assert_eq!(records[0]["B"], "y");
    }

    #[test]
    fn table_not_at_line_one() {
        let text = "Here is my review.\n\nSome prose first.\n\n| ID | Status |\n|----|--------|\n| ITEM_001 | Pass |\n\nClosing remarks.";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["ID"], "ITEM_001");
        assert_eq!(records[0]["Status"], "Pass");
    }

    #[test]
    fn all_empty_row_is_dropped() {
        let text = "| A | B |\n|---|---|\n|   |   |\n| x | y |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "x");
    }

    #[test]
    fn no_separator_means_no_table() {
        let text = "| A | B |\n| x | y |\n| p | q |\n";
        assert!(parse_tables(text).is_empty());
    }

    #[test]
    fn separator_needs_dash_or_colon() {
        let text = "| A | B |\n|   |   |\n| x | y |\n";
        assert!(parse_tables(text).is_empty());
    }

    #[test]
    fn header_plus_separator_only_is_not_a_table() {
        let text = "| A | B |\n|---|---|\n\nno data rows here";
        assert!(parse_tables(text).is_empty());
    }

    #[test]
    fn multiple_tables_concatenate_in_order() {
        let text = "| A |\n|---|\n| 1 |\n| 2 |\n\nsome prose\n\n| A |\n|---|\n| 3 |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["A"], "1");
        assert_eq!(records[1]["A"], "2");
        assert_eq!(records[2]["A"], "3");
    }

    #[test]
    fn short_row_leaves_trailing_columns_unset() {
        let text = "| A | B | C |\n|---|---|---|\n| x | y |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["A"], "x");
        assert_eq!(records[0]["B"], "y");
        assert!(!records[0].contains_key("C"));
    }

    #[test]
    fn long_row_drops_excess_cells() {
        let text = "| A | B |\n|---|---|\n| x | y | z |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0]["B"], "y");
    }

    #[test]
    fn empty_cell_is_empty_string_not_missing() {
        let text = "| A | B |\n|---|---|\n| x |  |\n";
        let records = parse_tables(text);
        assert_eq!(records[0]["B"], "");
    }

    #[test]
    fn colon_alignment_separators_accepted() {
        let text = "| A | B |\n|:--|--:|\n| x | y |\n";
        let records = parse_tables(text);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert!(parse_tables("no tables in here at all").is_empty());
        assert!(parse_tables("").is_empty());
    }
}
