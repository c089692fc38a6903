use crate::cycle_analysis::domain::{AnalysisOutcome, Cycle, DependencyGraph};
use std::collections::HashSet;

/// One suspended DFS call: the node, its successors, and the next successor to try
struct Frame<'a> {
    node: &'a str,
    successors: Vec<&'a str>,
    next: usize,
}

/// CycleDetector service enumerating circular dependency chains
///
/// Depth-first search with an explicit stack, so deep import chains cannot
/// exhaust the native call stack. Each node carries two marks: visited (ever
/// entered) and on-stack (on the active path). An edge to an on-stack node
/// closes a loop; the path slice from that node to the current one, plus the
/// node again, is recorded as a cycle.
///
/// Start nodes and successors are walked in sorted order, so the result is
/// deterministic for a given graph.
pub struct CycleDetector;

impl CycleDetector {
    pub fn detect(graph: &DependencyGraph) -> AnalysisOutcome {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut on_stack: HashSet<&str> = HashSet::new();
        let mut path: Vec<&str> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut cycles: Vec<Cycle> = Vec::new();

        for start in graph.modules() {
            if visited.contains(start) {
                continue;
            }

            Self::enter(graph, start, &mut visited, &mut on_stack, &mut path, &mut stack);

            while let Some(frame) = stack.last_mut() {
                if frame.next == frame.successors.len() {
                    let node = frame.node;
                    stack.pop();
                    path.pop();
                    on_stack.remove(node);
                    continue;
                }

                let target = frame.successors[frame.next];
                frame.next += 1;

                if !visited.contains(target) {
                    Self::enter(graph, target, &mut visited, &mut on_stack, &mut path, &mut stack);
                } else if on_stack.contains(target) {
                    if let Some(cycle) = Self::close_loop(&path, target) {
                        cycles.push(cycle);
                    }
                }
            }
        }

        AnalysisOutcome::from_cycles(cycles)
    }

    fn enter<'a>(
        graph: &'a DependencyGraph,
        node: &'a str,
        visited: &mut HashSet<&'a str>,
        on_stack: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
        stack: &mut Vec<Frame<'a>>,
    ) {
        visited.insert(node);
        on_stack.insert(node);
        path.push(node);
        stack.push(Frame {
            node,
            successors: graph.successors(node).collect(),
            next: 0,
        });
    }

    /// Cuts the active path at `target` and appends `target` to close the walk
    fn close_loop(path: &[&str], target: &str) -> Option<Cycle> {
        let start = path.iter().position(|node| *node == target)?;
        let nodes: Vec<String> = path[start..]
            .iter()
            .chain(std::iter::once(&target))
            .map(|node| node.to_string())
            .collect();
        Cycle::new(nodes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle_analysis::policies::NamespacePolicy;
    use crate::cycle_analysis::services::GraphBuilder;
    use std::collections::{BTreeSet, HashMap};

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let adjacency: HashMap<String, Vec<String>> = entries
            .iter()
            .map(|(id, deps)| (id.to_string(), deps.iter().map(|d| d.to_string()).collect()))
            .collect();
        DependencyGraph::from_adjacency(&adjacency)
    }

    /// Every consecutive pair is a real edge and the walk is closed
    fn assert_valid_cycle(graph: &DependencyGraph, cycle: &Cycle) {
        let nodes = cycle.nodes();
        assert_eq!(nodes.first(), nodes.last());
        for pair in nodes.windows(2) {
            assert!(
                graph.contains_edge(&pair[0], &pair[1]),
                "missing edge {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    fn node_sets(outcome: &AnalysisOutcome) -> Vec<BTreeSet<String>> {
        outcome
            .cycles()
            .iter()
            .map(|c| c.loop_body().iter().cloned().collect())
            .collect()
    }

    #[test]
    fn test_acyclic_graph() {
        let g = graph(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[])]);
        let outcome = CycleDetector::detect(&g);

        assert!(!outcome.has_cycles());
        assert!(outcome.cycles().is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let outcome = CycleDetector::detect(&DependencyGraph::new());
        assert_eq!(outcome, AnalysisOutcome::acyclic());
    }

    #[test]
    fn test_two_cycle() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        let outcome = CycleDetector::detect(&g);

        assert!(outcome.has_cycles());
        assert_eq!(outcome.cycle_count(), 1);
        let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(node_sets(&outcome), vec![expected]);
        assert_valid_cycle(&g, &outcome.cycles()[0]);
    }

    #[test]
    fn test_self_loop() {
        let g = graph(&[("a", &["a"])]);
        let outcome = CycleDetector::detect(&g);

        assert_eq!(outcome.cycle_count(), 1);
        assert_eq!(outcome.cycles()[0].nodes(), &["a", "a"]);
    }

    #[test]
    fn test_self_loop_on_id_with_space() {
        let raw = r#"{"ImportPath": "proj/my pkg", "Imports": ["proj/my pkg"]}"#;
        let policy = NamespacePolicy::new("proj/").unwrap();
        let g = GraphBuilder::build(raw, &policy).unwrap();
        let outcome = CycleDetector::detect(&g);

        assert_eq!(outcome.cycle_count(), 1);
        assert_eq!(outcome.cycles()[0].nodes(), &["proj/my pkg", "proj/my pkg"]);
    }

    #[test]
    fn test_disjoint_cycles() {
        let g = graph(&[
            ("a", &["b"]),
            ("b", &["a"]),
            ("x", &["y"]),
            ("y", &["z"]),
            ("z", &["x"]),
        ]);
        let outcome = CycleDetector::detect(&g);

        assert_eq!(outcome.cycle_count(), 2);
        for cycle in outcome.cycles() {
            assert_valid_cycle(&g, cycle);
        }

        let sets: HashSet<BTreeSet<String>> = node_sets(&outcome).into_iter().collect();
        let first: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let second: BTreeSet<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        assert!(sets.contains(&first));
        assert!(sets.contains(&second));
    }

    #[test]
    fn test_diamond_with_back_edge() {
        // a -> b -> d -> a and a -> c -> d -> a share the edge d -> a
        let g = graph(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &["a"])]);
        let outcome = CycleDetector::detect(&g);

        assert!(outcome.has_cycles());
        for cycle in outcome.cycles() {
            assert_valid_cycle(&g, cycle);
            assert!(cycle.loop_body().contains(&"a".to_string()));
            assert!(cycle.loop_body().contains(&"d".to_string()));
        }
    }

    #[test]
    fn test_dangling_target_is_leaf() {
        // "b" is only an import target, never a record key
        let g = graph(&[("a", &["b"])]);
        let outcome = CycleDetector::detect(&g);
        assert!(!outcome.has_cycles());
    }

    #[test]
    fn test_deterministic_output() {
        let g = graph(&[
            ("m", &["n"]),
            ("n", &["m", "o"]),
            ("o", &["o"]),
            ("p", &["q"]),
            ("q", &["p"]),
        ]);

        let first = CycleDetector::detect(&g);
        let second = CycleDetector::detect(&g);
        assert_eq!(first, second);
        assert_eq!(first.cycles()[0].nodes(), &["m", "n", "m"]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let ids: Vec<String> = (0..50_000).map(|i| format!("m{:05}", i)).collect();
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        for pair in ids.windows(2) {
            adjacency.insert(pair[0].clone(), vec![pair[1].clone()]);
        }
        adjacency.insert(ids[ids.len() - 1].clone(), vec![ids[0].clone()]);

        let outcome = CycleDetector::detect(&DependencyGraph::from_adjacency(&adjacency));
        assert_eq!(outcome.cycle_count(), 1);
        assert_eq!(outcome.cycles()[0].len(), 50_001);
    }

    #[test]
    fn test_external_edge_never_closes_loop() {
        // example.com/a -> other.org/b -> example.com/a would be a loop, but
        // other.org/b is outside the namespace
        let raw = r#"
            {"ImportPath": "example.com/a", "Imports": ["other.org/b"]}
            {"ImportPath": "other.org/b", "Imports": ["example.com/a"]}
        "#;
        let policy = NamespacePolicy::new("example.com/").unwrap();
        let graph = GraphBuilder::build(raw, &policy).unwrap();
        let outcome = CycleDetector::detect(&graph);

        assert!(!outcome.has_cycles());
    }

    #[test]
    fn test_internal_cycle_with_external_noise() {
        let raw = r#"
            {"ImportPath": "example.com/a", "Imports": ["fmt", "example.com/b"]}
            {"ImportPath": "example.com/b", "Imports": ["os", "example.com/a"]}
        "#;
        let policy = NamespacePolicy::new("example.com/").unwrap();
        let graph = GraphBuilder::build(raw, &policy).unwrap();
        let outcome = CycleDetector::detect(&graph);

        assert_eq!(outcome.cycle_count(), 1);
        assert_eq!(
            outcome.cycles()[0].render(),
            "example.com/a → example.com/b → example.com/a"
        );
        for node in outcome.cycles()[0].nodes() {
            assert!(policy.is_internal(node));
        }
    }
}
