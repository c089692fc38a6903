use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Maps `--format` to a formatter adapter so `main` only sees the port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the text report may use ANSI colors (ignored for JSON)
    ///
    /// # Examples
    /// ```
    /// use depcycle::application::dto::OutputFormat;
    /// use depcycle::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextReportFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }
}
