use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::error::UpdateError;
use crate::models::{FileStatus, LibraryEntry, TargetReport};

pub fn render_header(manifest: &Path, line_count: usize) {
    println!(
        "\n {} v{}",
        "readme-licenses".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        " Manifest: {} ({} libraries)\n",
        manifest.display(),
        line_count
    );
}

/// Print every resolved library as a table.
pub fn render_libraries(entries: &[LibraryEntry]) {
    if !entries.is_empty() {
        println!("{}\n", library_table(entries));
    }
}

fn library_table(entries: &[LibraryEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Artifact").add_attribute(Attribute::Bold),
            Cell::new("Website").add_attribute(Attribute::Bold),
        ]);

    for entry in entries {
        let license = if entry.licenses == crate::markdown::UNKNOWN_LICENSE {
            Cell::new(&entry.licenses).fg(Color::DarkGrey)
        } else {
            Cell::new(&entry.licenses)
        };

        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(&entry.version),
            license,
            Cell::new(entry.unique_id.as_deref().unwrap_or("-")),
            Cell::new(entry.website.as_deref().unwrap_or("-")),
        ]);
    }

    table
}

/// Print the status line for one processed target.
pub fn render_status(report: &TargetReport, verbose: bool, quiet: bool) {
    let path = report.path.display();
    match report.status {
        FileStatus::Error => {
            let message = report.error.as_deref().unwrap_or("unknown error");
            println!("{}", message.red());
            return;
        }
        _ if quiet => return,
        FileStatus::Updated => println!("{} {}", "Updated".green(), path),
        FileStatus::Unchanged => println!("{} {}", "Up to date".green(), path),
        FileStatus::Stale => println!("{} {}", "Stale".yellow(), path),
    }

    if verbose && report.marker_found == Some(false) {
        println!("  {} no marker region found, content left as is", "⚠".yellow());
    }
}

/// Print a fatal error, e.g. a manifest that could not be loaded.
pub fn render_error(err: &UpdateError) {
    println!("{} {}", "Error:".red().bold(), err);
}

/// Status message for a target that could not be processed.
pub fn target_error_message(err: &UpdateError) -> String {
    match err {
        UpdateError::Io { path, source } => format!("Update {} error: {}", path.display(), source),
        _ => format!("Error: {}", err),
    }
}

/// One-line tally across all targets.
pub fn render_summary(reports: &[TargetReport]) {
    let count = |status: FileStatus| reports.iter().filter(|r| r.status == status).count();

    println!(
        "Documents: {}  {}: {}  {}: {}  {}: {}  {}: {}",
        reports.len(),
        FileStatus::Updated,
        count(FileStatus::Updated).to_string().green(),
        FileStatus::Unchanged,
        count(FileStatus::Unchanged).to_string().green(),
        FileStatus::Stale,
        count(FileStatus::Stale).to_string().yellow(),
        FileStatus::Error,
        count(FileStatus::Error).to_string().red(),
    );
}
