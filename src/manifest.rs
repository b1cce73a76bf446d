use std::path::Path;

use crate::error::UpdateError;
use crate::models::Manifest;

/// Read and decode the AboutLibraries JSON manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, UpdateError> {
    let content = std::fs::read_to_string(path).map_err(|e| UpdateError::from_io(path, e))?;
    serde_json::from_str(&content).map_err(|source| UpdateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
