use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::models::{LibraryEntry, TargetReport};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    manifest: &'a Path,
    check: bool,
    libraries: &'a [LibraryEntry],
    targets: &'a [TargetReport],
}

/// Serialize the run summary as pretty-printed JSON.
pub fn to_json(
    manifest: &Path,
    check: bool,
    entries: &[LibraryEntry],
    targets: &[TargetReport],
) -> Result<String> {
    let report = JsonReport {
        manifest,
        check,
        libraries: entries,
        targets,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
