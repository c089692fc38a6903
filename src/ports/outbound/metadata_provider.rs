use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// What a successful provider run produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderOutput {
    /// Raw record stream (stdout)
    pub records: String,
    /// Non-empty diagnostics the provider printed alongside (stderr)
    pub diagnostics: Option<String>,
}

impl ProviderOutput {
    pub fn new(records: impl Into<String>) -> Self {
        Self {
            records: records.into(),
            diagnostics: None,
        }
    }

    /// Attaches diagnostics, ignoring blank text
    pub fn with_diagnostics(mut self, diagnostics: &str) -> Self {
        let trimmed = diagnostics.trim();
        self.diagnostics = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// MetadataProvider port for obtaining raw dependency records
///
/// This port abstracts the external tool (e.g. `go list -json ./...`)
/// that lists every module of a project together with its direct imports.
/// The use case calls it at most once per cache miss and never on a hit.
///
/// # Async Support
/// Running the provider is the only suspending operation of a check.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Runs the provider against a project and returns its raw output
    ///
    /// # Arguments
    /// * `project_root` - Directory the provider runs in
    ///
    /// # Returns
    /// The record stream plus any warnings the provider printed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The provider cannot be started
    /// - The provider exits abnormally
    /// - The provider exceeds its time limit
    /// - The output is not valid UTF-8
    async fn fetch_records(&self, project_root: &Path) -> Result<ProviderOutput>;

    /// Human-readable description of the provider, used in progress messages
    fn describe(&self) -> String;
}
