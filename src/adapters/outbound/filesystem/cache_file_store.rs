use crate::cycle_analysis::domain::CacheEntry;
use crate::ports::outbound::AnalysisCacheStore;
use crate::shared::error::CycleCheckError;
use crate::shared::security::{inspect_regular_file, MAX_CACHE_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// JsonCacheFileStore adapter persisting the cache entry as pretty JSON
///
/// Writes go to a temporary file in the target's directory which is then
/// renamed over the target, so readers see either the old entry or the new
/// one and never a partial write. The temporary file is created owner-only
/// (0600 on Unix) and keeps that mode after the rename.
pub struct JsonCacheFileStore;

impl JsonCacheFileStore {
    pub fn new() -> Self {
        Self
    }

    fn read_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        CycleCheckError::CacheRead {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    fn persist_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        CycleCheckError::CachePersist {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl Default for JsonCacheFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisCacheStore for JsonCacheFileStore {
    fn load(&self, path: &Path) -> Result<Option<CacheEntry>> {
        match fs::symlink_metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::read_error(path, e.to_string())),
            Ok(_) => {}
        }

        inspect_regular_file(path, MAX_CACHE_FILE_SIZE).map_err(|reason| Self::read_error(path, reason))?;

        let content = fs::read_to_string(path).map_err(|e| Self::read_error(path, e.to_string()))?;

        let entry: CacheEntry = serde_json::from_str(&content)
            .map_err(|e| Self::read_error(path, format!("failed to parse cache entry: {}", e)))?;

        Ok(Some(entry))
    }

    fn save(&self, path: &Path, entry: &CacheEntry) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        fs::create_dir_all(parent).map_err(|e| {
            Self::persist_error(path, format!("failed to create output directory: {}", e))
        })?;

        let json = serde_json::to_string_pretty(entry)
            .map_err(|e| Self::persist_error(path, format!("failed to marshal cache: {}", e)))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| Self::persist_error(path, format!("failed to write cache file: {}", e)))?;

        temp.write_all(json.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| Self::persist_error(path, format!("failed to write cache file: {}", e)))?;

        temp.persist(path).map_err(|e| {
            Self::persist_error(path, format!("failed to write cache file: {}", e.error))
        })?;

        Ok(())
    }
}
