//! depcycle - circular dependency checker with a staleness-aware cache
//!
//! Builds a project's internal module dependency graph from an external
//! metadata provider (by default `go list -json ./...`), enumerates every
//! circular dependency chain, and caches the outcome on disk until the
//! manifest changes, the mode changes, or the entry expires.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cycle_analysis`): Graph, cycles, cache entries and the pure algorithms
//! - **Application Layer** (`application`): The check use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depcycle::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let provider = CommandMetadataProvider::new(
//!     &["go".to_string(), "list".to_string(), "-json".to_string(), "./...".to_string()],
//!     Duration::from_secs(300),
//! )?;
//!
//! let use_case = CheckCircularDependenciesUseCase::new(
//!     provider,
//!     SystemClock::new(),
//!     FileSystemReader::new(),
//!     JsonCacheFileStore::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CheckRequest::new(
//!     PathBuf::from("."),
//!     "circular",
//!     chrono::Duration::minutes(60),
//!     PathBuf::from("go.mod"),
//!     PathBuf::from(".cicd/circular-dep-cache.json"),
//! );
//! let response = use_case.execute(&request).await?;
//!
//! let report = TextReportFormatter::new(false).format(&response)?;
//! print!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod cycle_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonCacheFileStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::process::CommandMetadataProvider;
    pub use crate::application::dto::{CacheStatus, CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::use_cases::CheckCircularDependenciesUseCase;
    pub use crate::cycle_analysis::domain::{
        AnalysisOutcome, CacheEntry, CacheValidity, Cycle, DependencyGraph, DependencyRecord,
        GraphSummary, MissReason, ModuleId,
    };
    pub use crate::cycle_analysis::policies::NamespacePolicy;
    pub use crate::cycle_analysis::services::{CycleDetector, GraphBuilder};
    pub use crate::ports::outbound::{
        AnalysisCacheStore, Clock, ManifestInspector, MetadataProvider, OutputPresenter,
        ProgressReporter, ProviderOutput, ReportFormatter,
    };
    pub use crate::shared::Result;
}
