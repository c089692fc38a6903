use crate::cycle_analysis::domain::CacheEntry;
use crate::shared::Result;
use std::path::Path;

/// AnalysisCacheStore port owning the persisted analysis result
///
/// An entry is always read and written whole. Validity is decided by
/// `CacheEntry::validity`, not by the store.
pub trait AnalysisCacheStore {
    /// Loads the entry stored at `path`, or `None` if nothing is stored there
    ///
    /// # Errors
    /// Returns a `CacheRead` error if the file is unreadable or malformed.
    /// Callers treat such an error as a cache miss, never as a failure.
    fn load(&self, path: &Path) -> Result<Option<CacheEntry>>;

    /// Replaces whatever is stored at `path` with `entry`
    ///
    /// # Errors
    /// Returns a `CachePersist` error if the entry cannot be written.
    fn save(&self, path: &Path, entry: &CacheEntry) -> Result<()>;
}
