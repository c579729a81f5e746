//! Shared types, error model, and configuration for itemcheck.
//!
//! This crate is the foundation depended on by all other itemcheck crates.
//! It provides:
//! - [`ItemCheckError`] — the unified error type
//! - Domain types ([`Checklist`], [`ChecklistItem`], [`ReviewRow`], [`ResponseFormat`])
//! - The checklist store ([`load_checklist`])
//! - Configuration ([`AppConfig`], config loading)

pub mod checklist;
pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use checklist::{DEFAULT_CHECKLIST_PATH, load_checklist};
pub use config::{
    AppConfig, DefaultsConfig, OpenRouterConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from, validate_api_key,
};
pub use error::{ItemCheckError, Result};
pub use types::{
    Checklist, ChecklistItem, Record, ResponseFormat, ReviewRow, STATUS_NOT_REVIEWED,
};
