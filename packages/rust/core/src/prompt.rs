//! Review prompt construction.
//!
//! The output-format section of the prompt and the reply parser are two
//! sides of one contract: both switch on the same [`ResponseFormat`] and the
//! field labels here must stay byte-identical to the keys the parser emits.

use itemcheck_shared::{Checklist, ResponseFormat};

/// Field labels the model must emit, shared by both reply formats.
const FIELD_LABELS: [&str; 7] = [
    "ID",
    "Category",
    "Requirement",
    "Description",
    "Status",
    "Comment",
    "Hint for improvement",
];

/// Allowed values for the Status field.
const STATUS_VALUES: &str = "Pass, Fail, Not Applicable, or Not Reviewed";

/// Build the full review prompt for a document against a checklist.
///
/// Document text is hard-cut at `max_chars` (not sentence-aware) with an
/// explicit truncation marker. The checklist is embedded as a per-category
/// outline rather than raw JSON.
pub fn build_review_prompt(
    document_text: &str,
    checklist: &Checklist,
    format: ResponseFormat,
    max_chars: usize,
) -> String {
    let document = truncate_content(document_text, max_chars);
    let outline = format_checklist_outline(checklist);
    let contract = output_contract(format);

    format!(
        "You are an ISO 26262 functional safety assessor reviewing an Item Definition \
         document (ISO 26262 Part 3).\n\n\
         Evaluate the document below against every item of the review checklist. \
         For each checklist item decide a Status ({STATUS_VALUES}), justify it in the \
         Comment with evidence from the document, and for failed items give a concrete \
         Hint for improvement.\n\n\
         # Review checklist\n\n{outline}\n\
         # Document under review\n\n{document}\n\n\
         # Output format\n\n{contract}"
    )
}

/// Render the checklist as a per-category outline.
pub fn format_checklist_outline(checklist: &Checklist) -> String {
    let mut out = String::new();
    for (category, items) in checklist.by_category() {
        out.push_str(&format!("## {category}\n"));
        for item in items {
            out.push_str(&format!(
                "- {}: {} ({})\n",
                item.id, item.requirement, item.iso_clause
            ));
            if !item.description.is_empty() {
                out.push_str(&format!("  {}\n", item.description));
            }
        }
        out.push('\n');
    }
    out
}

/// Truncate content to at most `max_chars` characters, appending a marker
/// when cut. The cut is a hard character boundary, never mid-codepoint.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.len() <= max_chars {
        return content.to_string();
    }
    let mut cut = max_chars;
    while cut > 0 && !content.is_char_boundary(cut) {
        cut -= 1;
    }
    let truncated = &content[..cut];
    format!("{truncated}\n\n[... content truncated for LLM context window ...]")
}

fn output_contract(format: ResponseFormat) -> String {
    match format {
        ResponseFormat::Table => format!(
            "Reply with exactly one markdown table and no other tables. The header row \
             must be:\n\n| {} |\n\nfollowed by a separator row, then one data row per \
             checklist item, in checklist order. Leave a cell empty rather than omitting \
             it. Do not add prose inside the table.",
            FIELD_LABELS.join(" | ")
        ),
        ResponseFormat::LabeledBlock => {
            let labels: Vec<String> = FIELD_LABELS
                .iter()
                .map(|l| format!("**{l}:** <value>"))
                .collect();
            format!(
                "Reply with one block per checklist item, in checklist order, each block \
                 separated by a line containing only `---`. Each block must contain exactly \
                 these lines:\n\n{}\n\nKeep every field on its own line; leave a value empty \
                 rather than omitting its line.",
                labels.join("\n")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemcheck_shared::ChecklistItem;

    fn checklist() -> Checklist {
        Checklist {
            items: vec![
                ChecklistItem {
                    id: "ITEM_001".into(),
                    category: "Scope".into(),
                    requirement: "The item boundary shall be defined".into(),
                    description: "Boundary documented".into(),
                    iso_clause: "Part 3, Clause 5.4.1".into(),
                },
                ChecklistItem {
                    id: "ITEM_002".into(),
                    category: "Interfaces".into(),
                    requirement: "External interfaces shall be listed".into(),
                    description: String::new(),
                    iso_clause: "Part 3, Clause 5.4.2".into(),
                },
            ],
        }
    }

    #[test]
    fn truncate_short_content() {
        assert_eq!(truncate_content("short text", 100), "short text");
    }

    #[test]
    fn truncate_long_content_appends_marker() {
        let content = "a".repeat(200);
        let result = truncate_content(&content, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("truncated"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let content = "ä".repeat(100); // 2 bytes per char
        let result = truncate_content(&content, 101);
        assert!(result.contains("truncated"));
        // Must not panic and must contain only whole characters.
        assert!(result.starts_with(&"ä".repeat(50)));
    }

    #[test]
    fn outline_groups_by_category() {
        let outline = format_checklist_outline(&checklist());
        assert!(outline.contains("## Scope"));
        assert!(outline.contains("## Interfaces"));
        assert!(outline.contains("ITEM_001: The item boundary shall be defined"));
        assert!(outline.contains("(Part 3, Clause 5.4.2)"));
    }

    #[test]
    fn table_prompt_names_all_columns() {
        let prompt =
            build_review_prompt("doc text", &checklist(), ResponseFormat::Table, 12_000);
        assert!(prompt.contains(
            "| ID | Category | Requirement | Description | Status | Comment | Hint for improvement |"
        ));
        assert!(prompt.contains("doc text"));
    }

    #[test]
    fn labeled_prompt_names_all_labels() {
        let prompt =
            build_review_prompt("doc text", &checklist(), ResponseFormat::LabeledBlock, 12_000);
        assert!(prompt.contains("**ID:**"));
        assert!(prompt.contains("**Hint for improvement:**"));
        assert!(prompt.contains("`---`"));
    }

    #[test]
    fn prompt_truncates_document() {
        let doc = "x".repeat(20_000);
        let prompt = build_review_prompt(&doc, &checklist(), ResponseFormat::Table, 12_000);
        assert!(prompt.contains("[... content truncated for LLM context window ...]"));
        assert!(!prompt.contains(&"x".repeat(12_001)));
    }
}
