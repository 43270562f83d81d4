//! lidump main entry point
//!
//! This is the command-line interface for the LinkedIn employee email extractor.

use anyhow::Context;
use clap::Parser;
use lidump::config::load_config;
use lidump::extract::{run_extraction, ExtractionRequest};
use lidump::output::{write_delimited, write_delimited_file};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// lidump: LinkedIn Employee Email Extractor
///
/// Lists the employees of a LinkedIn company page and infers each one's
/// corporate email address from the pattern Hunter.io reports for the
/// company's domain.
#[derive(Parser, Debug)]
#[command(name = "lidump")]
#[command(version)]
#[command(about = "LinkedIn Employee Email Extractor", long_about = None)]
struct Cli {
    /// LinkedIn company url - https://www.linkedin.com/company/<company>
    #[arg(long)]
    url: String,

    /// LinkedIn 'li_at' session cookie
    #[arg(long)]
    cookie: String,

    /// Company email domain (e.g. example.com)
    #[arg(long)]
    domain: String,

    /// Write results to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    output_csv: Option<PathBuf>,

    /// Path to TOML configuration file holding the Hunter.io key
    #[arg(long, value_name = "CONFIG", default_value = "lidump.toml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let request = ExtractionRequest {
        company_url: cli.url,
        session_cookie: cli.cookie,
        email_domain: cli.domain,
    };

    let contacts = match run_extraction(&config, &request).await {
        Ok(contacts) => contacts,
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            return Err(e.into());
        }
    };

    match cli.output_csv {
        Some(path) => {
            write_delimited_file(&contacts, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Results written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_delimited(&contacts, &mut stdout.lock()).context("failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the roster.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lidump=info,warn"),
            1 => EnvFilter::new("lidump=debug,info"),
            2 => EnvFilter::new("lidump=trace,debug"),
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
