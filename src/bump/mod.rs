//! Bump pipeline: update the manifest, then the companion plugin file.
//!
//! Stages run once, in order, with no retries. The manifest is committed
//! before the plugin file is read, so a failure in the plugin stage leaves
//! the manifest already bumped.

use std::path::PathBuf;

use tracing::debug;

use crate::companion::{MissingPattern, read_companion, update_companion, write_companion};
use crate::error::{BumpError, CompanionError};
use crate::manifest::Manifest;
use crate::version::{BumpType, apply_bump, describe_bump, parse_version};

/// Configuration for a bump run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct BumpConfig {
    pub bump: BumpType,
    pub manifest_path: PathBuf,
    /// Date written to `date_updated`, as `YYYY-MM-DD`.
    pub today: String,
    pub dry_run: bool,
}

/// What a completed run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpSummary {
    pub previous_version: String,
    pub new_version: String,
    pub today: String,
    pub manifest_path: PathBuf,
    pub companion_path: PathBuf,
    pub missing_patterns: Vec<MissingPattern>,
    pub dry_run: bool,
}

/// Run the full bump pipeline.
pub fn run_bump(config: &BumpConfig) -> Result<BumpSummary, BumpError> {
    println!("Starting version increment...");

    // ── Stage 1: Manifest ──
    let mut manifest = Manifest::load(&config.manifest_path)?;
    let previous_version = manifest.version()?.to_string();
    let manifest_name = config
        .manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.manifest_path.display().to_string());
    println!("Current version in {}: {}", manifest_name, previous_version);
    println!("Bump type: {}", config.bump);

    // ── Stage 2: Version calculation ──
    let current = parse_version(&previous_version)?;
    println!(
        "Current version parts: major={}, minor={}, patch={}",
        current.major, current.minor, current.patch
    );

    let next = apply_bump(&current, config.bump)?;
    println!("{}", describe_bump(config.bump));
    let new_version = next.to_string();
    println!("New version will be: {}", new_version);

    // Resolve before writing so a manifest without plugin.pm_path is never touched.
    let companion_path = manifest.companion_path()?;

    // ── Stage 3: Commit manifest ──
    println!("Updating {}...", manifest_name);
    manifest.record_bump(&previous_version, &new_version);
    if config.dry_run {
        println!("[dry run] {} not written", manifest_name);
    } else {
        manifest.save()?;
        println!("{} updated successfully", manifest_name);
    }

    // ── Stage 4: Companion plugin file ──
    println!("Updating plugin file: {}", companion_path.display());
    let content = read_companion(&companion_path).map_err(|e| match e {
        // A dry run has not written the manifest, so this is not a partial failure.
        CompanionError::NotFound(path) if !config.dry_run => BumpError::CompanionNotFound {
            path,
            new_version: new_version.clone(),
        },
        other => BumpError::Companion(other),
    })?;

    let update = update_companion(&content, &next, &config.today);
    match &update.previous_version {
        Some(found) => println!("Found current version in plugin file: {}", found),
        None => println!("Warning: Could not find version in plugin file"),
    }
    println!("Today's date: {}", config.today);
    match &update.previous_date {
        Some(found) => println!("Found current date_updated in plugin file: {}", found),
        None => println!("Warning: Could not find date_updated in plugin file"),
    }

    if config.dry_run {
        println!("[dry run] plugin file not written");
    } else {
        write_companion(&companion_path, &update.content)?;
        println!("Plugin file updated successfully");
    }

    debug!(
        previous = %previous_version,
        new = %new_version,
        complete = update.is_complete(),
        "bump finished"
    );

    Ok(BumpSummary {
        previous_version,
        new_version,
        today: config.today.clone(),
        manifest_path: manifest.path().to_path_buf(),
        companion_path,
        missing_patterns: update.missing,
        dry_run: config.dry_run,
    })
}

/// Final report printed after a successful run.
pub fn format_summary(summary: &BumpSummary) -> String {
    let mut out = String::new();
    if summary.dry_run {
        out.push_str("\nDry run complete, no files were changed.\n");
    } else {
        out.push_str("\nVersion bump complete!\n");
    }
    out.push_str(&format!("Previous version: {}\n", summary.previous_version));
    out.push_str(&format!("New version: {}\n", summary.new_version));
    out.push_str(&format!("Date updated: {}", summary.today));
    out
}
