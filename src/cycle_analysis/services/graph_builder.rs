use crate::cycle_analysis::domain::{DependencyGraph, DependencyRecord};
use crate::cycle_analysis::policies::NamespacePolicy;
use crate::shared::error::CycleCheckError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashSet;

/// Wire shape of one record as emitted by `go list -json`
///
/// Every other field the provider emits (Dir, Name, Deps, ...) is ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "ImportPath", alias = "id")]
    import_path: String,
    #[serde(rename = "Imports", alias = "imports", default)]
    imports: Vec<String>,
}

/// GraphBuilder service for turning provider output into a DependencyGraph
///
/// Pure transform: no I/O, no state. Parsing is fail-fast, so a single bad
/// record aborts the whole build and no partial graph is ever returned.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Parses and filters a record stream in one step
    pub fn build(raw: &str, policy: &NamespacePolicy) -> Result<DependencyGraph> {
        let records = Self::parse_records(raw)?;
        Ok(Self::from_records(records, policy))
    }

    /// Decodes a stream of concatenated JSON objects into records
    ///
    /// # Errors
    /// - `Parse` for undecodable input, an empty id, or a repeated id.
    ///   `position` is the 1-based ordinal of the offending record.
    /// - `NoRecords` when the stream holds no records at all.
    pub fn parse_records(raw: &str) -> Result<Vec<DependencyRecord>> {
        let stream = serde_json::Deserializer::from_str(raw).into_iter::<RawRecord>();

        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for (index, item) in stream.enumerate() {
            let position = index + 1;
            let raw_record = item.map_err(|e| CycleCheckError::Parse {
                position,
                details: format!(
                    "failed to decode package info at line {}, column {}: {}",
                    e.line(),
                    e.column(),
                    e
                ),
            })?;

            if !seen.insert(raw_record.import_path.clone()) {
                return Err(CycleCheckError::Parse {
                    position,
                    details: format!("duplicate record for '{}'", raw_record.import_path),
                }
                .into());
            }

            let record = DependencyRecord::new(raw_record.import_path, raw_record.imports)
                .map_err(|e| CycleCheckError::Parse {
                    position,
                    details: e.to_string(),
                })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(CycleCheckError::NoRecords.into());
        }

        Ok(records)
    }

    /// Assembles a graph from already parsed records
    ///
    /// Edges whose target falls outside the policy's namespace are kept only
    /// in the unfiltered view.
    pub fn from_records(records: Vec<DependencyRecord>, policy: &NamespacePolicy) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for record in records {
            let (id, imports) = record.into_parts();
            graph.insert_module(id.into_string(), imports, |target| policy.is_internal(target));
        }
        graph
    }
}
