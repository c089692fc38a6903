use crate::cycle_analysis::domain::{AnalysisOutcome, GraphSummary, MissReason};
use chrono::Duration;
use std::fmt;

/// How the outcome of a check was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from a fresh cache entry of the given age
    Hit { age: Duration },
    /// Rebuilt from provider output
    Miss { reason: MissReason },
}

impl CacheStatus {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit { .. })
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheStatus::Hit { age } => write!(f, "cache hit (age {}s)", age.num_seconds()),
            CacheStatus::Miss { reason } => write!(f, "cache miss ({})", reason),
        }
    }
}

/// CheckResponse - Result of the circular dependency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResponse {
    pub outcome: AnalysisOutcome,
    pub cache_status: CacheStatus,
    /// Graph figures, only known when the graph was rebuilt
    pub summary: Option<GraphSummary>,
    /// Prefix used for the rebuild, only known when the graph was rebuilt
    pub namespace_prefix: Option<String>,
}

impl CheckResponse {
    pub fn from_cache(outcome: AnalysisOutcome, age: Duration) -> Self {
        Self {
            outcome,
            cache_status: CacheStatus::Hit { age },
            summary: None,
            namespace_prefix: None,
        }
    }

    pub fn rebuilt(
        outcome: AnalysisOutcome,
        reason: MissReason,
        summary: GraphSummary,
        namespace_prefix: String,
    ) -> Self {
        Self {
            outcome,
            cache_status: CacheStatus::Miss { reason },
            summary: Some(summary),
            namespace_prefix: Some(namespace_prefix),
        }
    }

    pub fn has_cycles(&self) -> bool {
        self.outcome.has_cycles()
    }
}
