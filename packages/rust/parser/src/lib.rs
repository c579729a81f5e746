//! LLM-reply parsers for item definition reviews.
//!
//! The review prompt promises one of two reply shapes — a markdown table or
//! labeled blocks — and each shape has its paired parser here. Callers select
//! the strategy with the same [`ResponseFormat`] tag the prompt was built
//! with, keeping the two sides of the contract in lockstep.

mod blocks;
mod table;

use itemcheck_shared::{Record, ResponseFormat};

pub use blocks::parse_labeled_blocks;
pub use table::parse_tables;

/// Parse an LLM reply into row records using the format the prompt promised.
pub fn parse(text: &str, format: ResponseFormat) -> Vec<Record> {
    match format {
        ResponseFormat::Table => parse_tables(text),
        ResponseFormat::LabeledBlock => parse_labeled_blocks(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_format() {
        let table_text = "| ID | Status |\n|----|----|\n| ITEM_001 | Pass |\n";
        let block_text = "**ID:** ITEM_001\n**Status:** Pass";

        let from_table = parse(table_text, ResponseFormat::Table);
        let from_blocks = parse(block_text, ResponseFormat::LabeledBlock);

        assert_eq!(from_table.len(), 1);
        assert_eq!(from_blocks.len(), 1);
        assert_eq!(from_table[0]["ID"], from_blocks[0]["ID"]);
        assert_eq!(from_table[0]["Status"], from_blocks[0]["Status"]);
    }

    #[test]
    fn table_parser_ignores_labeled_blocks() {
        let block_text = "**ID:** ITEM_001\n**Status:** Pass";
        assert!(parse(block_text, ResponseFormat::Table).is_empty());
    }
}
