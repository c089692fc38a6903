/// Cycle analysis core - pure domain logic with no I/O
///
/// - `domain`: value objects and aggregates (records, graph, cycles, cache entries)
/// - `services`: graph building and cycle detection
/// - `policies`: which edges count as internal to the project
pub mod domain;
pub mod policies;
pub mod services;
