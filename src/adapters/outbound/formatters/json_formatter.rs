use crate::application::dto::{CacheStatus, CheckResponse};
use crate::cycle_analysis::domain::{Cycle, GraphSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JSON document written for `--format json`
#[derive(Serialize)]
struct JsonReport<'a> {
    has_cycles: bool,
    cycles: &'a [Cycle],
    cache_status: JsonCacheStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace_prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a GraphSummary>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonCacheStatus {
    Hit { age_seconds: i64 },
    Miss { reason: String },
}

impl From<&CacheStatus> for JsonCacheStatus {
    fn from(status: &CacheStatus) -> Self {
        match status {
            CacheStatus::Hit { age } => JsonCacheStatus::Hit {
                age_seconds: age.num_seconds(),
            },
            CacheStatus::Miss { reason } => JsonCacheStatus::Miss {
                reason: reason.to_string(),
            },
        }
    }
}

/// JsonReportFormatter adapter producing a machine-readable report
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let report = JsonReport {
            has_cycles: response.has_cycles(),
            cycles: response.outcome.cycles(),
            cache_status: JsonCacheStatus::from(&response.cache_status),
            namespace_prefix: response.namespace_prefix.as_deref(),
            summary: response.summary.as_ref(),
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
