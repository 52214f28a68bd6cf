//! pmbump - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pmbump::bump::{BumpConfig, format_summary, run_bump};
use pmbump::companion::today_utc;
use pmbump::manifest::DEFAULT_MANIFEST;
use pmbump::version::BumpType;

const USAGE_HINT: &str = "Please specify version bump type: major, minor, or patch";

/// Bump the version in package.json and its companion plugin file.
#[derive(Parser, Debug)]
#[command(name = "pmbump")]
#[command(about = "Bump the version in package.json and its companion plugin file")]
#[command(version)]
struct Cli {
    /// Bump type: major, minor, or patch
    #[arg(value_name = "BUMP_TYPE")]
    bump: Option<String>,

    /// Extra positional arguments are ignored
    #[arg(hide = true)]
    rest: Vec<String>,

    /// Path to the package manifest
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Date to write into date_updated (YYYY-MM-DD, defaults to today in UTC)
    #[arg(long, value_parser = parse_date)]
    date: Option<String>,

    /// Dry run - print what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date(raw: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", e.render().to_string().trim_end());
            eprintln!("{}", USAGE_HINT);
            return Ok(ExitCode::FAILURE);
        }
    };
    init_tracing(cli.verbose);

    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    // Step 1: Validate bump type before touching any file
    let bump = match cli.bump.as_deref().map(str::parse::<BumpType>) {
        Some(Ok(bump)) => bump,
        Some(Err(e)) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        None => {
            eprintln!("{}", USAGE_HINT);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Step 2: Run the pipeline
    let config = BumpConfig {
        bump,
        manifest_path: cli.manifest,
        today: cli.date.unwrap_or_else(today_utc),
        dry_run: cli.dry_run,
    };

    let summary = run_bump(&config).context("Version bump failed")?;

    println!("{}", format_summary(&summary));

    Ok(ExitCode::SUCCESS)
}
