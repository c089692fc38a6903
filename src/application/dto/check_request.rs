use chrono::Duration;
use std::path::PathBuf;

/// CheckRequest - Internal request DTO for the circular dependency check
///
/// Paths are already resolved against the project root by the time a
/// request is built.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Directory the metadata provider runs in
    pub project_root: PathBuf,
    /// Opaque tag partitioning cache entries by logical check
    pub mode: String,
    /// Maximum age of a cache entry
    pub ttl: Duration,
    /// Internal-edge prefix; inferred from the first record when `None`
    pub namespace_prefix: Option<String>,
    /// File whose modification time fingerprints the project
    pub manifest_path: PathBuf,
    pub cache_path: PathBuf,
    /// Skip the cache lookup and always rebuild
    pub force_rebuild: bool,
}

impl CheckRequest {
    pub fn new(
        project_root: PathBuf,
        mode: impl Into<String>,
        ttl: Duration,
        manifest_path: PathBuf,
        cache_path: PathBuf,
    ) -> Self {
        Self {
            project_root,
            mode: mode.into(),
            ttl,
            namespace_prefix: None,
            manifest_path,
            cache_path,
            force_rebuild: false,
        }
    }

    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = Some(prefix.into());
        self
    }

    pub fn with_force_rebuild(mut self, force: bool) -> Self {
        self.force_rebuild = force;
        self
    }
}
