use super::Cycle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of a cycle analysis: a pure function of the dependency graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredOutcome")]
pub struct AnalysisOutcome {
    has_cycles: bool,
    cycles: Vec<Cycle>,
}

/// Wire shape of a persisted outcome, checked before it becomes an `AnalysisOutcome`
#[derive(Deserialize)]
struct StoredOutcome {
    has_cycles: bool,
    #[serde(default)]
    cycles: Vec<Cycle>,
}

impl TryFrom<StoredOutcome> for AnalysisOutcome {
    type Error = String;

    fn try_from(stored: StoredOutcome) -> Result<Self, Self::Error> {
        if stored.has_cycles == stored.cycles.is_empty() {
            return Err(format!(
                "has_cycles is {} but {} cycle(s) are stored",
                stored.has_cycles,
                stored.cycles.len()
            ));
        }
        Ok(Self {
            has_cycles: stored.has_cycles,
            cycles: stored.cycles,
        })
    }
}

impl AnalysisOutcome {
    /// Outcome for an acyclic graph
    pub fn acyclic() -> Self {
        Self::default()
    }

    /// Builds an outcome from discovered cycles, in discovery order
    ///
    /// A cycle that is a rotation of one already kept is dropped; the first
    /// discovery's orientation wins.
    pub fn from_cycles(cycles: Vec<Cycle>) -> Self {
        let mut seen = HashSet::new();
        let cycles: Vec<Cycle> = cycles
            .into_iter()
            .filter(|cycle| seen.insert(cycle.canonical_key()))
            .collect();

        Self {
            has_cycles: !cycles.is_empty(),
            cycles,
        }
    }

    pub fn has_cycles(&self) -> bool {
        self.has_cycles
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}
