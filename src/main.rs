//! Langstats - Corpus Language Statistics
//!
//! A CLI tool that streams a corpus of speaker-annotated sentence records
//! and reports sentence counts per declared language plus the speakers
//! whose language is unset.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (invalid arguments, malformed corpus, write failure)

mod analysis;
mod cli;
mod config;
mod models;
mod progress;
mod report;
mod source;

use analysis::CorpusTally;
use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Config;
use progress::RecordProgress;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("Langstats v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Run failed: {}", e);
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .langstats.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".langstats.toml");

    if path.exists() {
        anyhow::bail!(".langstats.toml already exists. Remove it first or edit it manually.");
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .langstats.toml")?;

    println!("✅ Created .langstats.toml with default settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Diagnostics go to stderr so standard output carries only the completion
/// line (or the dry-run count).
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete statistics workflow.
fn run(args: Args) -> Result<()> {
    let start = Instant::now();

    // Load configuration and apply CLI overrides
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let input = config.input_path();

    // Handle --dry-run: count records and exit
    if args.dry_run {
        return handle_dry_run(&input);
    }

    let output = config.report_path();
    info!("Reading corpus from {}", input.display());

    let total = if config.general.progress { args.total } else { None };
    let progress = RecordProgress::new(total);
    if progress.is_enabled() {
        debug!("Progress indicator sized for {} records", total.unwrap_or(0));
    }

    // Single pass: the source pushes each record into the tally in
    // document order.
    let mut tally = CorpusTally::new();
    let records = source::for_each_record(&input, |record| {
        tally.observe(&record);
        progress.tick();
    })
    .with_context(|| format!("Failed to read corpus {}", input.display()))?;
    progress.finish();

    let stats = tally.into_stats();
    info!(
        "Processed {} records: {} languages, {} sentences without language, {} speakers without language",
        records,
        stats.languages.len(),
        stats.sentences_without_language,
        stats.speakers_without_language.len()
    );

    // Render and write the report
    let content = match config.report.format {
        OutputFormat::Json => report::generate_json_report(&stats)?,
        OutputFormat::Markdown => report::generate_markdown_report(&stats),
    };
    report::write_report(&output, &content)?;

    debug!("Finished in {:.1}s", start.elapsed().as_secs_f64());
    println!("✅ Done. Report saved to: {}", output.display());

    Ok(())
}

/// Handle --dry-run: stream the corpus, print the record count, write nothing.
fn handle_dry_run(input: &Path) -> Result<()> {
    info!("Dry run: counting records in {}", input.display());

    let count = source::for_each_record(input, |_| {})
        .with_context(|| format!("Failed to read corpus {}", input.display()))?;
    println!("{} records in {}", count, input.display());

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .langstats.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
