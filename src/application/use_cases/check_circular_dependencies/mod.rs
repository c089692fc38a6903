use crate::application::dto::{CheckRequest, CheckResponse};
use crate::cycle_analysis::domain::{CacheEntry, CacheValidity, DependencyRecord, MissReason};
use crate::cycle_analysis::policies::NamespacePolicy;
use crate::cycle_analysis::services::{CycleDetector, GraphBuilder};
use crate::ports::outbound::{
    AnalysisCacheStore, Clock, ManifestInspector, MetadataProvider, ProgressReporter,
};
use crate::shared::error::CycleCheckError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Number of stages reported while rebuilding
const REBUILD_STAGES: usize = 3;

/// CheckCircularDependenciesUseCase - staleness-aware circular dependency check
///
/// Serves the stored outcome while it is still valid and otherwise rebuilds
/// the graph from provider output, detects cycles, and stores the result.
///
/// Per invocation:
/// 1. Fingerprint the manifest (its modification time)
/// 2. Load the cache entry; a missing or unreadable entry is a miss
/// 3. Validate mode, fingerprint and age; a fresh entry is returned as is
/// 4. On a miss, run the provider once, build the graph, detect cycles
/// 5. Persist the new entry; a failed write is only a warning
///
/// # Type Parameters
/// * `P` - MetadataProvider implementation
/// * `C` - Clock implementation
/// * `M` - ManifestInspector implementation
/// * `S` - AnalysisCacheStore implementation
/// * `R` - ProgressReporter implementation
pub struct CheckCircularDependenciesUseCase<P, C, M, S, R> {
    metadata_provider: P,
    clock: C,
    manifest_inspector: M,
    cache_store: S,
    progress_reporter: R,
}

impl<P, C, M, S, R> CheckCircularDependenciesUseCase<P, C, M, S, R>
where
    P: MetadataProvider,
    C: Clock,
    M: ManifestInspector,
    S: AnalysisCacheStore,
    R: ProgressReporter,
{
    /// Creates a new CheckCircularDependenciesUseCase with injected dependencies
    pub fn new(
        metadata_provider: P,
        clock: C,
        manifest_inspector: M,
        cache_store: S,
        progress_reporter: R,
    ) -> Self {
        Self {
            metadata_provider,
            clock,
            manifest_inspector,
            cache_store,
            progress_reporter,
        }
    }

    /// Executes the check
    ///
    /// # Errors
    /// Fails if the manifest cannot be fingerprinted, the provider fails or
    /// times out, or its output holds no records or a malformed record.
    /// No cache entry is written in any of these cases. Cache read and write
    /// problems never fail the check.
    pub async fn execute(&self, request: &CheckRequest) -> Result<CheckResponse> {
        let fingerprint = self
            .manifest_inspector
            .modified_time(&request.manifest_path)?;

        let reason = if request.force_rebuild {
            MissReason::Forced
        } else {
            match self.lookup_cache(request, fingerprint) {
                Ok(response) => return Ok(response),
                Err(reason) => reason,
            }
        };

        self.progress_reporter
            .report(&format!("🔄 Rebuilding dependency graph (cache miss: {})", reason));

        let response = self.rebuild(request, reason).await?;
        self.persist(request, fingerprint, &response);

        Ok(response)
    }

    /// Returns the cached response if the stored entry is still valid,
    /// otherwise the reason it cannot be used
    fn lookup_cache(
        &self,
        request: &CheckRequest,
        fingerprint: DateTime<Utc>,
    ) -> std::result::Result<CheckResponse, MissReason> {
        let entry = match self.cache_store.load(&request.cache_path) {
            Ok(Some(entry)) => entry,
            Ok(None) => return Err(MissReason::NotExists),
            Err(e) => {
                self.progress_reporter
                    .report(&format!("ℹ️  Ignoring unusable cache: {}", single_line(&e)));
                return Err(MissReason::Invalid);
            }
        };

        let now = self.clock.now();
        match entry.validity(&request.mode, fingerprint, now, request.ttl) {
            CacheValidity::Fresh => {
                let age = entry.age(now);
                self.progress_reporter.report(&format!(
                    "⚡ Using cached result from {} ({}s old)",
                    entry.last_check.to_rfc3339(),
                    age.num_seconds()
                ));
                Ok(CheckResponse::from_cache(entry.outcome, age))
            }
            CacheValidity::Stale(reason) => Err(reason),
        }
    }

    async fn rebuild(&self, request: &CheckRequest, reason: MissReason) -> Result<CheckResponse> {
        self.progress_reporter.report_progress(
            1,
            REBUILD_STAGES,
            Some(&format!("Running {}", self.metadata_provider.describe())),
        );
        let output = self
            .metadata_provider
            .fetch_records(&request.project_root)
            .await?;
        if let Some(diagnostics) = &output.diagnostics {
            self.progress_reporter
                .report(&format!("📝 Provider diagnostics:\n{}", diagnostics));
        }

        self.progress_reporter
            .report_progress(2, REBUILD_STAGES, Some("Building dependency graph"));
        let records = GraphBuilder::parse_records(&output.records)?;
        let record_count = records.len();
        let policy = self.resolve_policy(request, &records)?;
        let graph = GraphBuilder::from_records(records, &policy);
        let summary = graph.summary();

        self.progress_reporter
            .report_progress(3, REBUILD_STAGES, Some("Detecting cycles"));
        let outcome = CycleDetector::detect(&graph);

        self.progress_reporter.report_completion(&format!(
            "📊 Analyzed {} module(s) under '{}': {} internal edge(s), {} external edge(s) ignored",
            record_count,
            policy.prefix(),
            summary.internal_edge_count,
            summary.external_edge_count
        ));

        Ok(CheckResponse::rebuilt(
            outcome,
            reason,
            summary,
            policy.prefix().to_string(),
        ))
    }

    fn resolve_policy(
        &self,
        request: &CheckRequest,
        records: &[DependencyRecord],
    ) -> Result<NamespacePolicy> {
        if let Some(prefix) = &request.namespace_prefix {
            return NamespacePolicy::new(prefix.clone());
        }

        // parse_records never returns an empty list
        let policy = NamespacePolicy::infer(records)
            .ok_or(CycleCheckError::NoRecords)?;
        self.progress_reporter.report(&format!(
            "🔎 Inferred namespace prefix '{}'",
            policy.prefix()
        ));
        Ok(policy)
    }

    fn persist(&self, request: &CheckRequest, fingerprint: DateTime<Utc>, response: &CheckResponse) {
        let entry = CacheEntry::new(
            self.clock.now(),
            fingerprint,
            request.mode.clone(),
            response.outcome.clone(),
        );

        if let Err(e) = self.cache_store.save(&request.cache_path, &entry) {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: result not cached. {}", e));
        }
    }
}

fn single_line(error: &anyhow::Error) -> String {
    error.to_string().lines().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests;
