use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Library manifest as exported by the AboutLibraries Gradle plugin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub libraries: Vec<Library>,
    /// Shared license table, keyed by the ids used in [`LicenseRef::Key`].
    #[serde(default)]
    pub licenses: HashMap<String, LicenseEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artifact_version: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub licenses: Option<Vec<LicenseRef>>,
    /// Maven coordinates (`group:artifact`).
    #[serde(default)]
    pub unique_id: Option<String>,
}

/// A library's license: either spelled out inline or a key into [`Manifest::licenses`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LicenseRef {
    Inline {
        #[serde(default)]
        name: Option<String>,
    },
    Key(String),
}

/// Entry of the license table; only the display name is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseEntry {
    #[serde(default)]
    pub name: Option<String>,
}

/// One library after license resolution, ready to be rendered as a Markdown line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryEntry {
    pub name: String,
    pub version: String,
    pub website: Option<String>,
    pub licenses: String,
    pub unique_id: Option<String>,
}

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Whether the start/end marker region was located.
    pub marker_found: bool,
    /// Whether the regenerated content differs from what was on disk.
    pub changed: bool,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Updated,
    Unchanged,
    Stale,
    Error,
}

impl FileStatus {
    /// Status of a target that was processed without error.
    ///
    /// A written file always counts as updated, even when its marker region
    /// was missing and the content stayed the same.
    pub fn from_outcome(outcome: &FileOutcome) -> Self {
        match (outcome.written, outcome.changed) {
            (true, _) => FileStatus::Updated,
            (false, true) => FileStatus::Stale,
            (false, false) => FileStatus::Unchanged,
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Updated => write!(f, "updated"),
            FileStatus::Unchanged => write!(f, "unchanged"),
            FileStatus::Stale => write!(f, "stale"),
            FileStatus::Error => write!(f, "error"),
        }
    }
}

/// Per-target entry of the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
