use crate::ports::outbound::ManifestInspector;
use crate::shared::error::CycleCheckError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for inspecting the project manifest
///
/// This adapter implements the ManifestInspector port. It reads file
/// metadata only; the manifest's contents are never opened.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestInspector for FileSystemReader {
    fn modified_time(&self, manifest_path: &Path) -> Result<DateTime<Utc>> {
        let manifest_error = |details: String| CycleCheckError::Manifest {
            path: manifest_path.to_path_buf(),
            details,
        };

        let metadata = fs::metadata(manifest_path).map_err(|e| manifest_error(e.to_string()))?;

        if !metadata.is_file() {
            return Err(manifest_error("not a regular file".to_string()).into());
        }

        let modified = metadata
            .modified()
            .map_err(|e| manifest_error(format!("modification time unavailable: {}", e)))?;

        Ok(DateTime::<Utc>::from(modified))
    }
}
