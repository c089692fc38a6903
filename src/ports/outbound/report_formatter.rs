use crate::application::dto::CheckResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a check result
///
/// Implementations turn a `CheckResponse` into text for the presenter
/// (human-readable report, JSON, ...).
pub trait ReportFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String>;
}
