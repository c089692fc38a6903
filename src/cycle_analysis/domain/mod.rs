pub mod analysis_outcome;
pub mod cache_entry;
pub mod cycle;
pub mod dependency_graph;
pub mod dependency_record;

pub use analysis_outcome::AnalysisOutcome;
pub use cache_entry::{CacheEntry, CacheValidity, MissReason};
pub use cycle::Cycle;
pub use dependency_graph::{DependencyGraph, GraphSummary};
pub use dependency_record::{DependencyRecord, ModuleId};
