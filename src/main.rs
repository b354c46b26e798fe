//! Web-Lens main entry point
//!
//! This is the command-line interface for the Web-Lens page analyzer.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use web_lens::config::{load_config, Config};
use web_lens::output::{format_error, render, OutputFormat};

/// Web-Lens: a single-page web analyzer
///
/// Web-Lens fetches one page and reports its HTML version, title, heading
/// census, internal/external/inaccessible link counts and whether it appears
/// to contain a login form.
#[derive(Parser, Debug)]
#[command(name = "web-lens")]
#[command(version)]
#[command(about = "A single-page web analyzer", long_about = None)]
struct Cli {
    /// URL to analyze (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    match web_lens::analyze_url(&config, &cli.url).await {
        Ok(result) => {
            let report = render(&result, cli.format).context("Failed to render report")?;
            print!("{}", report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Analysis of {} failed: {}", cli.url, e);
            eprint!("{}", format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("web_lens=info,warn"),
            1 => EnvFilter::new("web_lens=debug,info"),
            2 => EnvFilter::new("web_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
