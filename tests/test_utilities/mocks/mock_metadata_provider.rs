use async_trait::async_trait;
use depcycle::prelude::*;
use depcycle::shared::error::CycleCheckError;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock MetadataProvider that returns canned output and counts invocations
#[derive(Clone)]
pub struct MockMetadataProvider {
    output: Arc<Mutex<String>>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockMetadataProvider {
    pub fn new(output: &str) -> Self {
        Self {
            output: Arc::new(Mutex::new(output.to_string())),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider that exits abnormally with the given stderr
    pub fn failing(stderr: &str) -> Self {
        Self {
            failure: Some(stderr.to_string()),
            ..Self::new("")
        }
    }

    /// Replaces the output returned by later calls
    pub fn set_output(&self, output: &str) {
        *self.output.lock().unwrap() = output.to_string();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn fetch_records(&self, _project_root: &Path) -> Result<ProviderOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(stderr) = &self.failure {
            return Err(CycleCheckError::ExternalTool {
                command: self.describe(),
                details: format!("exit code 1: {}", stderr),
            }
            .into());
        }
        Ok(ProviderOutput::new(self.output.lock().unwrap().clone()))
    }

    fn describe(&self) -> String {
        "mock provider".to_string()
    }
}
