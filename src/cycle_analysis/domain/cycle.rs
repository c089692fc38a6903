use crate::shared::error::CycleCheckError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Cycle value object: a closed walk `[n0, n1, ..., nk]` with `n0 == nk`
///
/// A self-import is the degenerate case `[a, a]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Cycle(Vec<String>);

impl Cycle {
    /// Creates a cycle, checking that it has at least two entries and is closed
    pub fn new(nodes: Vec<String>) -> Result<Self> {
        if nodes.len() < 2 {
            return Err(CycleCheckError::Validation {
                message: format!(
                    "A cycle needs at least 2 entries (got {})",
                    nodes.len()
                ),
            }
            .into());
        }

        if nodes.first() != nodes.last() {
            return Err(CycleCheckError::Validation {
                message: format!(
                    "A cycle must start and end at the same module: {}",
                    nodes.join(" → ")
                ),
            }
            .into());
        }

        Ok(Self(nodes))
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// Number of entries including the closing repeat of the first node
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a cycle has at least two entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct modules on the loop
    pub fn loop_body(&self) -> &[String] {
        &self.0[..self.0.len() - 1]
    }

    /// Arrow-joined rendering, e.g. `a → b → a`
    pub fn render(&self) -> String {
        self.0.join(" → ")
    }

    /// Rotation-independent identity of the loop
    ///
    /// The body is rotated to start at its smallest id, so `[b, a, b]` and
    /// `[a, b, a]` share a key.
    pub fn canonical_key(&self) -> Vec<String> {
        let body = self.loop_body();
        let start = body
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
            .unwrap_or(0);

        body[start..]
            .iter()
            .chain(body[..start].iter())
            .cloned()
            .collect()
    }
}

impl TryFrom<Vec<String>> for Cycle {
    type Error = anyhow::Error;

    fn try_from(nodes: Vec<String>) -> Result<Self> {
        Self::new(nodes)
    }
}

impl From<Cycle> for Vec<String> {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
