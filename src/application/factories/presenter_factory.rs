use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the report goes: stdout by default, a file with `--output`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportDestination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for ReportDestination {
    fn from(output: Option<PathBuf>) -> Self {
        output.map_or(ReportDestination::Stdout, ReportDestination::File)
    }
}

impl ReportDestination {
    /// Terminal styling only makes sense when writing to stdout
    pub fn is_stdout(&self) -> bool {
        matches!(self, ReportDestination::Stdout)
    }
}

/// Factory for creating output presenters
///
/// ```
/// use depcycle::application::factories::{PresenterFactory, ReportDestination};
///
/// let presenter = PresenterFactory::create(ReportDestination::from(None));
/// ```
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(destination: ReportDestination) -> Box<dyn OutputPresenter> {
        match destination {
            ReportDestination::Stdout => Box::new(StdoutPresenter::new()),
            ReportDestination::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
