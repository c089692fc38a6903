/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, file system, clock, console).
pub mod cache_store;
pub mod clock;
pub mod manifest_inspector;
pub mod metadata_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use cache_store::AnalysisCacheStore;
pub use clock::Clock;
pub use manifest_inspector::ManifestInspector;
pub use metadata_provider::{MetadataProvider, ProviderOutput};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
