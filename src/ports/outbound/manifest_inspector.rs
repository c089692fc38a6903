use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

/// ManifestInspector port for fingerprinting the project manifest
///
/// Only the modification time is ever looked at, never the contents.
pub trait ManifestInspector {
    /// Returns the manifest's last modification time
    ///
    /// # Errors
    /// Returns a `Manifest` error if the file is missing or its metadata
    /// cannot be read.
    fn modified_time(&self, manifest_path: &Path) -> Result<DateTime<Utc>>;
}
