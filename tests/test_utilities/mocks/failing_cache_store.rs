use depcycle::prelude::*;
use depcycle::shared::error::CycleCheckError;
use std::path::Path;

/// AnalysisCacheStore that never holds an entry and refuses every write
pub struct FailingCacheStore;

impl AnalysisCacheStore for FailingCacheStore {
    fn load(&self, _path: &Path) -> Result<Option<CacheEntry>> {
        Ok(None)
    }

    fn save(&self, path: &Path, _entry: &CacheEntry) -> Result<()> {
        Err(CycleCheckError::CachePersist {
            path: path.to_path_buf(),
            details: "failed to write cache file: Permission denied (os error 13)".to_string(),
        }
        .into())
    }
}
