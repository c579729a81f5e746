//! Blank review-template generation.

use chrono::{DateTime, Local};

use itemcheck_shared::Checklist;

/// Render a blank, manually fillable review template for a checklist.
pub fn render_template(checklist: &Checklist) -> String {
    render_template_at(checklist, Local::now())
}

/// Render the template with an explicit generation timestamp.
pub fn render_template_at(checklist: &Checklist, stamp: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("# ISO 26262 Part 3 - Item Definition Review Template\n\n");
    out.push_str(&format!(
        "Generated: {}\n",
        stamp.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Checklist items: {}\n\n", checklist.len()));
    out.push_str(
        "Fill in Status (Pass, Fail, Not Applicable, or Not Reviewed), Comment, and \
         Hint for improvement for every item below.\n\n---\n",
    );

    for (category, items) in checklist.by_category() {
        for item in items {
            out.push_str(&format!("**ID:** {}\n", item.id));
            out.push_str(&format!("**Category:** {category}\n"));
            out.push_str(&format!("**Requirement:** {}\n", item.requirement));
            out.push_str(&format!("**Description:** {}\n", item.description));
            out.push_str("**Status:**\n");
            out.push_str("**Comment:**\n");
            out.push_str("**Hint for improvement:**\n");
            out.push_str("---\n");
        }
    }

    out
}
