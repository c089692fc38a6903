/// Mock implementations for testing
mod failing_cache_store;
mod mock_clock;
mod mock_manifest_inspector;
mod mock_metadata_provider;
mod mock_progress_reporter;

pub use failing_cache_store::FailingCacheStore;
pub use mock_clock::MockClock;
pub use mock_manifest_inspector::MockManifestInspector;
pub use mock_metadata_provider::MockMetadataProvider;
pub use mock_progress_reporter::MockProgressReporter;
