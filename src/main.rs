//! `readme-licenses` — regenerate the third-party library list in README files.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Load the AboutLibraries manifest ([`manifest::load_manifest`]).
//! 4. Render one Markdown line per named library ([`markdown`]).
//! 5. Splice the lines into each target document's marker region ([`section`]).
//! 6. Report per-document status ([`report`]).
//! 7. Exit `0`, or `1` when the manifest could not be loaded, a document failed,
//!    or `--check` found a stale document.

mod cli;
mod config;
mod error;
mod manifest;
mod markdown;
mod models;
mod report;
mod section;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, ReportFormat};
use config::{load_config, Target};
use manifest::load_manifest;
use models::{FileStatus, TargetReport};
use report::terminal;
use section::{update_file, WriteMode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.path.as_path();
    let json = cli.report == ReportFormat::Json;

    let config = load_config(root, cli.config.as_deref())?;
    let manifest_path = cli
        .manifest
        .clone()
        .unwrap_or_else(|| config.manifest_path(root));

    // Nothing is touched unless the manifest loads
    let manifest = match load_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            if json {
                eprintln!("Error: {}", err);
            } else {
                terminal::render_error(&err);
            }
            std::process::exit(1);
        }
    };

    let lines = markdown::format_libraries(&manifest);

    if !json && !cli.quiet {
        terminal::render_header(&manifest_path, lines.len());
        if cli.verbose {
            terminal::render_libraries(&markdown::collect_entries(&manifest));
        }
    }

    let mode = if cli.check {
        WriteMode::Check
    } else {
        WriteMode::Write
    };

    let mut reports = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let report = process_target(root, target, &lines, mode);
        if !json {
            terminal::render_status(&report, cli.verbose, cli.quiet);
        }
        reports.push(report);
    }

    if json {
        let entries = markdown::collect_entries(&manifest);
        println!(
            "{}",
            report::json::to_json(&manifest_path, cli.check, &entries, &reports)?
        );
    } else if cli.quiet {
        terminal::render_summary(&reports);
    }

    let failed = reports
        .iter()
        .any(|r| matches!(r.status, FileStatus::Error | FileStatus::Stale));

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Update one document; failures are captured in the report so the remaining
/// documents are still attempted.
fn process_target(root: &Path, target: &Target, lines: &[String], mode: WriteMode) -> TargetReport {
    let path = target.resolved_path(root);
    match update_file(&path, lines, &target.start_marker, &target.end_marker, mode) {
        Ok(outcome) => TargetReport {
            status: FileStatus::from_outcome(&outcome),
            marker_found: Some(outcome.marker_found),
            path: outcome.path,
            error: None,
        },
        Err(err) => TargetReport {
            path: err.path().to_path_buf(),
            status: FileStatus::Error,
            marker_found: None,
            error: Some(terminal::target_error_message(&err)),
        },
    }
}
