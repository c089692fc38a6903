use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// DependencyGraph aggregate: module id -> set of internal module ids it imports
///
/// Two views are kept. The internal adjacency only holds edges whose target
/// is inside the project namespace and is the only view cycle detection walks.
/// The unfiltered view keeps every import as listed by the provider and is
/// used for diagnostics only.
///
/// Keys are ordered so that traversal over the graph is deterministic.
/// An id that only ever appears as an import target is a leaf: it has no
/// key in either view and `successors` yields nothing for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    internal: BTreeMap<String, BTreeSet<String>>,
    unfiltered: BTreeMap<String, Vec<String>>,
}

/// Size figures reported after a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub module_count: usize,
    pub internal_edge_count: usize,
    pub external_edge_count: usize,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph where every listed edge counts as internal
    ///
    /// Handy for feeding hand-written adjacency maps straight to the detector.
    pub fn from_adjacency(adjacency: &HashMap<String, Vec<String>>) -> Self {
        let mut graph = Self::new();
        for (id, imports) in adjacency {
            graph.insert_module(id.clone(), imports.clone(), |_| true);
        }
        graph
    }

    /// Adds a module and its imports, keeping only edges accepted by `is_internal`
    /// in the internal view. Re-inserting an id replaces its previous entry.
    pub(crate) fn insert_module<F>(&mut self, id: String, imports: Vec<String>, is_internal: F)
    where
        F: Fn(&str) -> bool,
    {
        let internal: BTreeSet<String> = imports
            .iter()
            .filter(|target| is_internal(target))
            .cloned()
            .collect();

        self.internal.insert(id.clone(), internal);
        self.unfiltered.insert(id, imports);
    }

    /// Module ids that appeared as record keys, in sorted order
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.internal.keys().map(String::as_str)
    }

    /// Internal successors of `id` in sorted order; empty for leaves
    pub fn successors(&self, id: &str) -> impl Iterator<Item = &str> {
        self.internal
            .get(id)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.internal
            .get(from)
            .is_some_and(|targets| targets.contains(to))
    }

    pub fn contains_module(&self, id: &str) -> bool {
        self.internal.contains_key(id)
    }

    /// Imports of `id` exactly as the provider listed them, external ones included
    pub fn unfiltered_imports(&self, id: &str) -> Option<&[String]> {
        self.unfiltered.get(id).map(Vec::as_slice)
    }

    pub fn module_count(&self) -> usize {
        self.internal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal.is_empty()
    }

    pub fn internal_edge_count(&self) -> usize {
        self.internal.values().map(BTreeSet::len).sum()
    }

    /// Distinct dropped targets per module; repeats count once, like internal edges
    pub fn external_edge_count(&self) -> usize {
        self.unfiltered
            .iter()
            .map(|(id, imports)| {
                let internal = self.internal.get(id);
                imports
                    .iter()
                    .filter(|target| !internal.is_some_and(|set| set.contains(*target)))
                    .collect::<BTreeSet<_>>()
                    .len()
            })
            .sum()
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            module_count: self.module_count(),
            internal_edge_count: self.internal_edge_count(),
            external_edge_count: self.external_edge_count(),
        }
    }
}
