use chrono::{DateTime, Duration, Utc};
use depcycle::prelude::*;
use depcycle::shared::error::CycleCheckError;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// ManifestInspector with a settable modification time
///
/// `None` simulates a missing manifest.
#[derive(Clone)]
pub struct MockManifestInspector {
    modified: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl MockManifestInspector {
    pub fn modified_at(modified: DateTime<Utc>) -> Self {
        Self {
            modified: Arc::new(Mutex::new(Some(modified))),
        }
    }

    pub fn missing() -> Self {
        Self {
            modified: Arc::new(Mutex::new(None)),
        }
    }

    /// Moves the modification time forward, like editing the file
    pub fn touch(&self, by: Duration) {
        if let Some(modified) = self.modified.lock().unwrap().as_mut() {
            *modified += by;
        }
    }
}

impl ManifestInspector for MockManifestInspector {
    fn modified_time(&self, manifest_path: &Path) -> Result<DateTime<Utc>> {
        self.modified.lock().unwrap().ok_or_else(|| {
            CycleCheckError::Manifest {
                path: manifest_path.to_path_buf(),
                details: "No such file or directory (os error 2)".to_string(),
            }
            .into()
        })
    }
}
