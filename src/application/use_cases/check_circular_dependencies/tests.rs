use super::*;
use crate::application::dto::CacheStatus;
use crate::cycle_analysis::domain::AnalysisOutcome;
use crate::ports::outbound::ProviderOutput;
use chrono::{Duration, TimeZone};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

// Mock implementations for testing
struct MockProvider {
    output: ProviderOutput,
    calls: AtomicUsize,
}

impl MockProvider {
    fn new(output: &str) -> Self {
        Self {
            output: ProviderOutput::new(output),
            calls: AtomicUsize::new(0),
        }
    }

    fn with_diagnostics(mut self, diagnostics: &str) -> Self {
        self.output = self.output.with_diagnostics(diagnostics);
        self
    }
}

#[async_trait::async_trait]
impl MetadataProvider for MockProvider {
    async fn fetch_records(&self, _project_root: &Path) -> Result<ProviderOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }

    fn describe(&self) -> String {
        "mock provider".to_string()
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FixedManifest(DateTime<Utc>);

impl ManifestInspector for FixedManifest {
    fn modified_time(&self, _manifest_path: &Path) -> Result<DateTime<Utc>> {
        Ok(self.0)
    }
}

#[derive(Default)]
struct MemoryStore {
    entry: RefCell<Option<CacheEntry>>,
    corrupt: bool,
    read_only: bool,
    saves: Cell<usize>,
}

impl AnalysisCacheStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<Option<CacheEntry>> {
        if self.corrupt {
            return Err(CycleCheckError::CacheRead {
                path: path.to_path_buf(),
                details: "expected value at line 1 column 1".to_string(),
            }
            .into());
        }
        Ok(self.entry.borrow().clone())
    }

    fn save(&self, path: &Path, entry: &CacheEntry) -> Result<()> {
        if self.read_only {
            return Err(CycleCheckError::CachePersist {
                path: path.to_path_buf(),
                details: "read-only file system".to_string(),
            }
            .into());
        }
        self.saves.set(self.saves.get() + 1);
        *self.entry.borrow_mut() = Some(entry.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

const CYCLIC_RECORDS: &str = r#"
{"ImportPath": "example.com/app/a", "Imports": ["example.com/app/b", "fmt"]}
{"ImportPath": "example.com/app/b", "Imports": ["example.com/app/a"]}
"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
}

fn manifest_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap()
}

fn request() -> CheckRequest {
    CheckRequest::new(
        PathBuf::from("/project"),
        "circular",
        Duration::minutes(60),
        PathBuf::from("/project/go.mod"),
        PathBuf::from("/project/.cicd/circular-dep-cache.json"),
    )
}

type TestUseCase =
    CheckCircularDependenciesUseCase<MockProvider, FixedClock, FixedManifest, MemoryStore, RecordingReporter>;

fn use_case(records: &str, store: MemoryStore) -> TestUseCase {
    CheckCircularDependenciesUseCase::new(
        MockProvider::new(records),
        FixedClock(now()),
        FixedManifest(manifest_time()),
        store,
        RecordingReporter::default(),
    )
}

fn stored(mode: &str, last_check: DateTime<Utc>, outcome: AnalysisOutcome) -> MemoryStore {
    MemoryStore {
        entry: RefCell::new(Some(CacheEntry::new(last_check, manifest_time(), mode, outcome))),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_first_run_rebuilds_and_persists() {
    let uc = use_case(CYCLIC_RECORDS, MemoryStore::default());

    let response = uc.execute(&request()).await.unwrap();

    assert!(response.has_cycles());
    assert_eq!(
        response.cache_status,
        CacheStatus::Miss {
            reason: MissReason::NotExists
        }
    );
    assert_eq!(uc.metadata_provider.calls.load(Ordering::SeqCst), 1);

    let entry = uc.cache_store.entry.borrow().clone().unwrap();
    assert_eq!(entry.last_check, now());
    assert_eq!(entry.manifest_fingerprint, manifest_time());
    assert_eq!(entry.mode, "circular");
    assert_eq!(entry.outcome, response.outcome);
}

#[tokio::test]
async fn test_fresh_entry_skips_provider() {
    let store = stored("circular", now() - Duration::minutes(5), AnalysisOutcome::acyclic());
    let uc = use_case(CYCLIC_RECORDS, store);

    let response = uc.execute(&request()).await.unwrap();

    assert!(!response.has_cycles());
    assert_eq!(
        response.cache_status,
        CacheStatus::Hit {
            age: Duration::minutes(5)
        }
    );
    assert!(response.summary.is_none());
    assert_eq!(uc.metadata_provider.calls.load(Ordering::SeqCst), 0);
    assert_eq!(uc.cache_store.saves.get(), 0);
}

#[tokio::test]
async fn test_mode_mismatch_rebuilds() {
    let store = stored("outdated", now() - Duration::minutes(5), AnalysisOutcome::acyclic());
    let uc = use_case(CYCLIC_RECORDS, store);

    let response = uc.execute(&request()).await.unwrap();

    assert_eq!(
        response.cache_status,
        CacheStatus::Miss {
            reason: MissReason::ModeMismatch
        }
    );
    assert_eq!(uc.cache_store.entry.borrow().as_ref().unwrap().mode, "circular");
}

#[tokio::test]
async fn test_force_rebuild_ignores_fresh_entry() {
    let store = stored("circular", now() - Duration::minutes(1), AnalysisOutcome::acyclic());
    let uc = use_case(CYCLIC_RECORDS, store);

    let response = uc
        .execute(&request().with_force_rebuild(true))
        .await
        .unwrap();

    assert_eq!(
        response.cache_status,
        CacheStatus::Miss {
            reason: MissReason::Forced
        }
    );
    assert!(response.has_cycles());
    assert_eq!(uc.metadata_provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_corrupt_cache_is_a_miss() {
    let store = MemoryStore {
        corrupt: true,
        ..Default::default()
    };
    let uc = use_case(CYCLIC_RECORDS, store);

    let response = uc.execute(&request()).await.unwrap();

    assert_eq!(
        response.cache_status,
        CacheStatus::Miss {
            reason: MissReason::Invalid
        }
    );
    assert!(uc.progress_reporter.errors.borrow().is_empty());
}

#[tokio::test]
async fn test_persist_failure_is_only_a_warning() {
    let store = MemoryStore {
        read_only: true,
        ..Default::default()
    };
    let uc = use_case(CYCLIC_RECORDS, store);

    let response = uc.execute(&request()).await.unwrap();

    assert!(response.has_cycles());
    let errors = uc.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Warning"));
    assert!(errors[0].contains("read-only file system"));
}

#[tokio::test]
async fn test_parse_error_writes_nothing() {
    let uc = use_case(r#"{"ImportPath": "example.com/app/a"} {"ImportPath": ["#, MemoryStore::default());

    let err = uc.execute(&request()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CycleCheckError>(),
        Some(CycleCheckError::Parse { position: 2, .. })
    ));
    assert!(uc.cache_store.entry.borrow().is_none());
}

#[tokio::test]
async fn test_empty_provider_output_is_no_records() {
    let uc = use_case("\n", MemoryStore::default());

    let err = uc.execute(&request()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CycleCheckError>(),
        Some(CycleCheckError::NoRecords)
    ));
    assert_eq!(uc.cache_store.saves.get(), 0);
}

#[tokio::test]
async fn test_prefix_inferred_when_not_configured() {
    let uc = use_case(CYCLIC_RECORDS, MemoryStore::default());

    let response = uc.execute(&request()).await.unwrap();

    assert_eq!(response.namespace_prefix.as_deref(), Some("example.com/"));
    assert!(uc
        .progress_reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("Inferred namespace prefix 'example.com/'")));
}

#[tokio::test]
async fn test_configured_prefix_filters_edges() {
    // Only a is internal: b -> a survives, a -> b is dropped, no loop remains
    let uc = use_case(CYCLIC_RECORDS, MemoryStore::default());

    let response = uc
        .execute(&request().with_namespace_prefix("example.com/app/a"))
        .await
        .unwrap();

    assert!(!response.has_cycles());
    let summary = response.summary.unwrap();
    assert_eq!(summary.module_count, 2);
    assert_eq!(summary.internal_edge_count, 1);
    assert_eq!(summary.external_edge_count, 2);
}

#[tokio::test]
async fn test_summary_reported_after_rebuild() {
    let uc = use_case(CYCLIC_RECORDS, MemoryStore::default());

    let response = uc.execute(&request()).await.unwrap();

    let summary = response.summary.unwrap();
    assert_eq!(summary.internal_edge_count, 2);
    assert_eq!(summary.external_edge_count, 1);
    assert!(uc
        .progress_reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("Analyzed 2 module(s)")));
}

#[tokio::test]
async fn test_provider_diagnostics_are_reported() {
    let uc = CheckCircularDependenciesUseCase::new(
        MockProvider::new(CYCLIC_RECORDS).with_diagnostics("go: warning: ignoring build constraints\n"),
        FixedClock(now()),
        FixedManifest(manifest_time()),
        MemoryStore::default(),
        RecordingReporter::default(),
    );

    let response = uc.execute(&request()).await.unwrap();

    assert!(response.has_cycles());
    let messages = uc.progress_reporter.messages.borrow();
    assert!(messages
        .iter()
        .any(|m| m == "📝 Provider diagnostics:\ngo: warning: ignoring build constraints"));
    assert!(uc.progress_reporter.errors.borrow().is_empty());
}

#[tokio::test]
async fn test_no_diagnostics_message_without_stderr() {
    let uc = use_case(CYCLIC_RECORDS, MemoryStore::default());

    uc.execute(&request()).await.unwrap();

    assert!(!uc
        .progress_reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("Provider diagnostics")));
}
