use super::AnalysisOutcome;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted result of one analysis run
///
/// Written wholesale after every rebuild and read at the start of every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub last_check: DateTime<Utc>,
    pub manifest_fingerprint: DateTime<Utc>,
    pub mode: String,
    pub outcome: AnalysisOutcome,
}

/// Why a cached outcome could not be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// No cache file on disk
    NotExists,
    /// Cache file present but unreadable or malformed
    Invalid,
    ModeMismatch,
    ManifestChanged,
    Expired,
    /// Rebuild requested by the caller
    Forced,
}

impl MissReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MissReason::NotExists => "not_exists",
            MissReason::Invalid => "invalid",
            MissReason::ModeMismatch => "mode_mismatch",
            MissReason::ManifestChanged => "manifest_changed",
            MissReason::Expired => "expired",
            MissReason::Forced => "forced",
        }
    }
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of validating a loaded cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheValidity {
    Fresh,
    Stale(MissReason),
}

impl CacheEntry {
    pub fn new(
        last_check: DateTime<Utc>,
        manifest_fingerprint: DateTime<Utc>,
        mode: impl Into<String>,
        outcome: AnalysisOutcome,
    ) -> Self {
        Self {
            last_check,
            manifest_fingerprint,
            mode: mode.into(),
            outcome,
        }
    }

    /// Decides whether this entry can answer a check for `mode`
    ///
    /// Checks run in order: mode, manifest fingerprint, then age. An entry is
    /// expired once `now - last_check >= ttl`.
    pub fn validity(
        &self,
        mode: &str,
        manifest_fingerprint: DateTime<Utc>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> CacheValidity {
        if self.mode != mode {
            return CacheValidity::Stale(MissReason::ModeMismatch);
        }

        if self.manifest_fingerprint != manifest_fingerprint {
            return CacheValidity::Stale(MissReason::ManifestChanged);
        }

        if now.signed_duration_since(self.last_check) >= ttl {
            return CacheValidity::Stale(MissReason::Expired);
        }

        CacheValidity::Fresh
    }

    /// Age of the entry relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.last_check)
    }
}
