use crate::cycle_analysis::domain::DependencyRecord;
use crate::shared::error::CycleCheckError;
use crate::shared::Result;

/// NamespacePolicy decides which dependency edges are internal to the project
///
/// An edge `id -> target` is internal iff `target` starts with the prefix.
/// Only internal edges take part in cycle detection; the rest are dropped
/// silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePolicy {
    prefix: String,
}

impl NamespacePolicy {
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err(CycleCheckError::Validation {
                message: "Namespace prefix must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self { prefix })
    }

    /// Derives a prefix from the first record: its first path segment plus `/`
    ///
    /// `example.com/pkg/a` yields `example.com/`. Returns `None` for an empty
    /// record list.
    pub fn infer(records: &[DependencyRecord]) -> Option<Self> {
        let first = records.first()?;
        let id = first.id().as_str();
        let segment = id.split('/').next().unwrap_or(id);
        Some(Self {
            prefix: format!("{}/", segment),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_internal(&self, target: &str) -> bool {
        target.starts_with(&self.prefix)
    }
}
