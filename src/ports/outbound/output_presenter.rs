use crate::shared::Result;

/// OutputPresenter port for the finished report
///
/// Implementations decide where the report lands (stdout or a file given with
/// `--output`). Progress and warnings never go through this port.
pub trait OutputPresenter {
    /// Writes `content` as-is, without adding a trailing newline
    ///
    /// # Errors
    /// Returns `OutputWrite` if a report file cannot be written, including
    /// when the target is a symbolic link or its directory is missing.
    fn present(&self, content: &str) -> Result<()>;
}
