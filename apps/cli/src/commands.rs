//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use itemcheck_core::pipeline::{ProgressReporter, ReviewConfig, ReviewOutcome};
use itemcheck_core::{OpenRouterClient, run_batch, run_review};
use itemcheck_shared::{init_config, load_checklist, load_config, validate_api_key};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// itemcheck — review Item Definitions against ISO 26262 Part 3.
#[derive(Parser)]
#[command(
    name = "itemcheck",
    version,
    about = "Review an Item Definition document against an ISO 26262 Part 3 checklist.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Review a document and export the findings bundle.
    Review {
        /// Document to review (defaults to the first file in the input folder).
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Folder scanned for documents (defaults to config value).
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// Exports folder for the ZIP bundle (defaults to config value).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Checklist JSON file (defaults to config value).
        #[arg(short, long)]
        checklist: Option<PathBuf>,

        /// OpenRouter model ID (defaults to config value).
        #[arg(short, long)]
        model: Option<String>,

        /// LLM reply format: table or labeled.
        #[arg(long)]
        format: Option<String>,

        /// Review every document in the input folder instead of the first.
        #[arg(long)]
        all: bool,
    },

    /// Generate a blank review template for manual completion.
    Template {
        /// Write the template to a file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Checklist JSON file (defaults to config value).
        #[arg(short, long)]
        checklist: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "itemcheck=info",
        1 => "itemcheck=debug",
        _ => "itemcheck=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Review {
            file,
            input_dir,
            out,
            checklist,
            model,
            format,
            all,
        } => cmd_review(file, input_dir, out, checklist, model, format, all),
        Command::Template { out, checklist } => cmd_template(out, checklist),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn cmd_review(
    file: Option<PathBuf>,
    input_dir: Option<PathBuf>,
    out: Option<PathBuf>,
    checklist: Option<PathBuf>,
    model: Option<String>,
    format: Option<String>,
    all: bool,
) -> Result<()> {
    // Validate API key before doing anything
    let config = load_config()?;
    let api_key = validate_api_key(&config)?;

    // Flags override config file values
    let mut review_config = ReviewConfig::from_app_config(&config)?;
    review_config.file = file;
    if let Some(dir) = input_dir {
        review_config.input_dir = dir;
    }
    if let Some(dir) = out {
        review_config.exports_dir = dir;
    }
    if let Some(path) = checklist {
        review_config.checklist_path = path;
    }
    if let Some(model) = model {
        review_config.model_id = model;
    }
    if let Some(format) = format {
        review_config.response_format = format
            .parse()
            .map_err(|e: String| color_eyre::eyre::eyre!(e))?;
    }

    info!(
        model = %review_config.model_id,
        format = review_config.response_format.as_str(),
        all,
        "starting review"
    );

    let llm = OpenRouterClient::new(api_key, review_config.model_id.clone())?;
    let reporter = CliProgress::new();

    if all {
        let batch = run_batch(&review_config, &llm, &reporter)?;
        reporter.clear();

        println!();
        println!("  Batch review complete!");
        println!("  Reviewed: {}", batch.succeeded.len());
        println!("  Skipped:  {}", batch.skipped.len());
        println!();
        for outcome in &batch.succeeded {
            print_outcome(outcome);
        }
        for (path, reason) in &batch.skipped {
            println!("  Skipped {}: {reason}", path.display());
        }
        println!();
    } else {
        let outcome = run_review(&review_config, &llm, &reporter)?;

        println!();
        println!("  Review complete!");
        print_outcome(&outcome);
        println!();
    }

    Ok(())
}

fn print_outcome(outcome: &ReviewOutcome) {
    println!("  Document:  {}", outcome.document.display());
    println!("  Bundle:    {}", outcome.zip_path.display());
    println!(
        "  Rows:      {} (checklist items: {})",
        outcome.row_count, outcome.checklist_count
    );
    println!("  SHA-256:   {}", outcome.sha256);
    println!("  Time:      {:.1}s", outcome.elapsed.as_secs_f64());
}

fn cmd_template(out: Option<PathBuf>, checklist: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let checklist_path =
        checklist.unwrap_or_else(|| PathBuf::from(&config.defaults.checklist_path));

    let checklist = load_checklist(&checklist_path)?;
    let template = itemcheck_core::render_template(&checklist);

    match out {
        Some(path) => {
            std::fs::write(&path, template)?;
            println!("Template written to {}", path.display());
        }
        None => print!("{template}"),
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config file created at {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let rendered = toml::to_string_pretty(&config)?;
    println!("{rendered}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _outcome: &ReviewOutcome) {
        self.spinner.finish_and_clear();
    }
}
