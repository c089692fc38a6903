/// ProgressReporter port for reporting progress during operations
///
/// This port is the crate's logging channel: cache decisions, rebuild
/// stages, and non-fatal warnings all go through it (e.g., to stderr).
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a rebuild stage
    ///
    /// # Arguments
    /// * `current` - Number of the stage being entered (1-based)
    /// * `total` - Number of stages
    /// * `message` - Optional stage description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or a non-fatal warning (e.g. a failed cache write)
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
