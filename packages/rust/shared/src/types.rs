//! Core domain types for item definition reviews.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A parsed LLM-reply row: column/label name mapped to cell/value text.
pub type Record = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// A single requirement from the ISO 26262 Part 3 review checklist.
///
/// Missing keys in the source JSON deserialize to empty strings; downstream
/// lookups fall back to defaults rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Checklist item identifier (e.g., `ITEM_001`).
    #[serde(default)]
    pub id: String,
    /// Grouping category (e.g., "Functional Behavior").
    #[serde(default)]
    pub category: String,
    /// The requirement text the document is assessed against.
    #[serde(default)]
    pub requirement: String,
    /// Longer description of what evidence satisfies the requirement.
    #[serde(default)]
    pub description: String,
    /// ISO 26262 clause reference (e.g., "Part 3, Clause 5.4.1").
    #[serde(default)]
    pub iso_clause: String,
}

/// The full review checklist, loaded from `{"items": [...]}` JSON.
///
/// A missing `items` key deserializes to an empty checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checklist {
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Number of checklist items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the checklist has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lookup map keyed by item id.
    ///
    /// Duplicate ids overwrite: the item appearing last in the source list
    /// wins, matching the documented override-on-duplicate behavior.
    pub fn item_map(&self) -> HashMap<&str, &ChecklistItem> {
        let mut map = HashMap::with_capacity(self.items.len());
        for item in &self.items {
            map.insert(item.id.as_str(), item);
        }
        map
    }

    /// Group items by category, preserving first-seen category order and
    /// item order within each category.
    pub fn by_category(&self) -> Vec<(String, Vec<&ChecklistItem>)> {
        let mut groups: Vec<(String, Vec<&ChecklistItem>)> = Vec::new();
        for item in &self.items {
            let category = if item.category.is_empty() {
                "Other".to_string()
            } else {
                item.category.clone()
            };
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, items)) => items.push(item),
                None => groups.push((category, vec![item])),
            }
        }
        groups
    }
}

// ---------------------------------------------------------------------------
// ResponseFormat
// ---------------------------------------------------------------------------

/// The LLM-reply contract shared by the prompt builder and the parser.
///
/// The prompt's output-format section and the parser strategy are two sides
/// of one contract and must always be selected by the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// One pipe-delimited markdown table, one row per checklist item.
    Table,
    /// `**Label:** value` blocks separated by `---` rules.
    LabeledBlock,
}

impl ResponseFormat {
    /// Stable name used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::LabeledBlock => "labeled",
        }
    }
}

impl std::str::FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "labeled" | "labeled_block" | "labeled-block" => Ok(Self::LabeledBlock),
            other => Err(format!(
                "unknown response format '{other}': expected 'table' or 'labeled'"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ReviewRow
// ---------------------------------------------------------------------------

/// Status default when the model left the field blank or omitted it.
pub const STATUS_NOT_REVIEWED: &str = "Not Reviewed";

/// One assessed checklist item from the LLM's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    /// Checklist item id as emitted by the model (not validated).
    pub id: String,
    /// Requirement text as the model echoed it (checklist text preferred
    /// downstream when the id matches).
    pub requirement: String,
    /// Pass / Fail / Not Applicable / Not Reviewed.
    pub status: String,
    /// The model's assessment with evidence.
    pub comment: String,
    /// Improvement hint for failed items.
    pub hint: String,
}

impl ReviewRow {
    /// Build a row from a parsed record, defaulting missing fields.
    pub fn from_record(record: &Record) -> Self {
        let field = |key: &str| record.get(key).cloned().unwrap_or_default();
        let status = {
            let s = field("Status");
            if s.trim().is_empty() {
                STATUS_NOT_REVIEWED.to_string()
            } else {
                s
            }
        };
        Self {
            id: field("ID"),
            requirement: field("Requirement"),
            status,
            comment: field("Comment"),
            hint: field("Hint for improvement"),
        }
    }
}
