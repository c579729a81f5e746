//! itemcheck CLI — ISO 26262 Part 3 Item Definition review tool.
//!
//! Reviews an Item Definition document against a requirements checklist via
//! an LLM and exports the findings as a Word + CSV bundle.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
