//! Labeled-block parser for the field-per-line reply format.
//!
//! The single-item review prompt promises blocks of `**Label:** value` lines
//! separated by `---` rules or blank lines; this parser is its paired half.

use std::sync::LazyLock;

use regex::Regex;

use itemcheck_shared::Record;

/// `**Label:** value` or `**Label**: value` at the start of a line.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*:?\s*(.*)$").expect("valid regex"));

/// Parse labeled blocks into records, in appearance order.
///
/// Blocks are delimited by blank lines or horizontal rules. Within a block,
/// each labeled line starts a field; unlabeled lines continue the previous
/// field's value. Blocks containing no labels are skipped.
pub fn parse_labeled_blocks(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::new();
    let mut last_key: Option<String> = None;

    let mut flush = |record: &mut Record, last_key: &mut Option<String>| {
        if !record.is_empty() {
            records.push(std::mem::take(record));
        }
        *last_key = None;
    };

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() || is_rule_line(line) {
            flush(&mut current, &mut last_key);
            continue;
        }

        if let Some(caps) = LABEL_RE.captures(line) {
            let key = caps[1].trim().trim_end_matches(':').trim().to_string();
            let value = caps[2].trim().to_string();
            if !key.is_empty() {
                current.insert(key.clone(), value);
                last_key = Some(key);
                continue;
            }
        }

        // Continuation line: append to the last field's value.
        if let Some(key) = &last_key {
            if let Some(value) = current.get_mut(key) {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(line);
            }
        }
    }

    flush(&mut current, &mut last_key);

    tracing::debug!(blocks = records.len(), "labeled blocks parsed");
    records
}

/// A horizontal rule: three or more dashes and nothing else.
fn is_rule_line(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}
