//! End-to-end review pipeline: checklist → document → prompt → LLM → parse →
//! report bundle → exports.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument, warn};

use itemcheck_shared::{
    AppConfig, ItemCheckError, ResponseFormat, Result, ReviewRow, load_checklist,
};

use crate::llm::Llm;
use crate::prompt::build_review_prompt;

/// Configuration for a review run.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Folder scanned for documents when no explicit file is given.
    pub input_dir: PathBuf,
    /// Folder review bundles are exported to.
    pub exports_dir: PathBuf,
    /// Path to the checklist JSON file.
    pub checklist_path: PathBuf,
    /// Explicit document to review, overriding the folder scan.
    pub file: Option<PathBuf>,
    /// OpenRouter model ID.
    pub model_id: String,
    /// LLM reply contract shared with the parser.
    pub response_format: ResponseFormat,
    /// Maximum document characters embedded in the prompt.
    pub max_prompt_chars: usize,
}

impl ReviewConfig {
    /// Build a run configuration from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        let response_format: ResponseFormat = config
            .defaults
            .response_format
            .parse()
            .map_err(ItemCheckError::config)?;

        Ok(Self {
            input_dir: PathBuf::from(&config.defaults.input_dir),
            exports_dir: PathBuf::from(&config.defaults.exports_dir),
            checklist_path: PathBuf::from(&config.defaults.checklist_path),
            file: None,
            model_id: config.openrouter.default_model.clone(),
            response_format,
            max_prompt_chars: config.defaults.max_prompt_chars,
        })
    }
}

/// Result of a single review run.
#[derive(Debug)]
pub struct ReviewOutcome {
    /// The document that was reviewed.
    pub document: PathBuf,
    /// Where the ZIP bundle was exported.
    pub zip_path: PathBuf,
    /// Archive filename.
    pub zip_name: String,
    /// Base64-encoded archive for inline payloads.
    pub encoded_zip: String,
    /// SHA-256 of the archive, hex-encoded.
    pub sha256: String,
    /// Review rows parsed from the LLM reply.
    pub row_count: usize,
    /// Items in the loaded checklist.
    pub checklist_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when a review completes.
    fn done(&self, outcome: &ReviewOutcome);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _outcome: &ReviewOutcome) {}
}

/// Run a full review of one document.
///
/// 1. Load the checklist
/// 2. Locate and extract the document
/// 3. Build the prompt and call the LLM
/// 4. Parse the reply into review rows
/// 5. Assemble the report, bundle, and export
#[instrument(skip_all, fields(input_dir = %config.input_dir.display()))]
pub fn run_review(
    config: &ReviewConfig,
    llm: &dyn Llm,
    progress: &dyn ProgressReporter,
) -> Result<ReviewOutcome> {
    let start = Instant::now();

    // --- Phase 1: Checklist ---
    progress.phase("Loading checklist");
    let checklist = load_checklist(&config.checklist_path)?;
    info!(items = checklist.len(), "checklist loaded");

    // --- Phase 2: Document ---
    progress.phase("Locating document");
    let document = match &config.file {
        Some(path) => path.clone(),
        None => itemcheck_extract::find_document(&config.input_dir)?.ok_or_else(|| {
            ItemCheckError::no_content(format!(
                "no reviewable document in {:?}. Place a .txt, .pdf, or .docx file there.",
                config.input_dir
            ))
        })?,
    };

    progress.phase("Extracting document text");
    let text = itemcheck_extract::extract_path(&document)?;
    if text.trim().is_empty() {
        return Err(ItemCheckError::no_content(format!(
            "{:?} produced no readable text. Supported formats are .txt, .pdf, and .docx; \
             check that the file is not empty, scanned-image-only, or corrupted.",
            document
        )));
    }

    // --- Phase 3: LLM review ---
    progress.phase("Requesting LLM review");
    let prompt = build_review_prompt(
        &text,
        &checklist,
        config.response_format,
        config.max_prompt_chars,
    );

    let reply = llm.complete(&prompt).map_err(|e| match e {
        ItemCheckError::Llm(msg) => ItemCheckError::Llm(format!(
            "{msg}. Check network connectivity, the API key, and that model \
             '{}' is available.",
            config.model_id
        )),
        other => other,
    })?;

    // --- Phase 4: Parse ---
    progress.phase("Parsing review rows");
    let records = itemcheck_parser::parse(&reply, config.response_format);
    if records.is_empty() {
        warn!(
            format = config.response_format.as_str(),
            reply_chars = reply.len(),
            "no review rows found in LLM reply"
        );
    }
    let rows: Vec<ReviewRow> = records.iter().map(ReviewRow::from_record).collect();

    // --- Phase 5: Assemble and export ---
    progress.phase("Assembling report bundle");
    let report = itemcheck_report::assemble(&rows, &checklist)?;
    let bundle = itemcheck_report::bundle(&report)?;
    let zip_path = itemcheck_report::write_export(&config.exports_dir, &bundle)?;

    let outcome = ReviewOutcome {
        document,
        zip_path,
        zip_name: bundle.filename.clone(),
        encoded_zip: bundle.to_base64(),
        sha256: bundle.sha256,
        row_count: rows.len(),
        checklist_count: checklist.len(),
        elapsed: start.elapsed(),
    };

    progress.done(&outcome);

    info!(
        document = %outcome.document.display(),
        archive = %outcome.zip_name,
        rows = outcome.row_count,
        elapsed_ms = outcome.elapsed.as_millis(),
        "review complete"
    );

    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Batch mode
// ---------------------------------------------------------------------------

/// Result of a batch review over all candidates in the input folder.
#[derive(Debug)]
pub struct BatchOutcome {
    pub succeeded: Vec<ReviewOutcome>,
    /// Files that failed, with the failure message. A per-file failure never
    /// aborts the batch.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Review every candidate document in the input folder, sequentially, in
/// lexicographic filename order.
#[instrument(skip_all, fields(input_dir = %config.input_dir.display()))]
pub fn run_batch(
    config: &ReviewConfig,
    llm: &dyn Llm,
    progress: &dyn ProgressReporter,
) -> Result<BatchOutcome> {
    let candidates = itemcheck_extract::find_documents(&config.input_dir)?;
    if candidates.is_empty() {
        return Err(ItemCheckError::no_content(format!(
            "no reviewable documents in {:?}. Place .txt, .pdf, or .docx files there.",
            config.input_dir
        )));
    }

    let mut succeeded = Vec::new();
    let mut skipped = Vec::new();

    for candidate in candidates {
        let file_config = ReviewConfig {
            file: Some(candidate.clone()),
            ..config.clone()
        };

        match run_review(&file_config, llm, progress) {
            Ok(outcome) => succeeded.push(outcome),
            Err(e) => {
                warn!(document = %candidate.display(), error = %e, "review failed, skipping file");
                skipped.push((candidate, e.to_string()));
            }
        }
    }

    info!(
        succeeded = succeeded.len(),
        skipped = skipped.len(),
        "batch review complete"
    );

    Ok(BatchOutcome { succeeded, skipped })
}
