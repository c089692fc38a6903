use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Detect circular dependencies between a project's internal modules
///
/// Results are cached and reused until the manifest changes, the mode
/// changes, or the cache entry outlives its TTL.
#[derive(Parser, Debug)]
#[command(name = "depcycle")]
#[command(version)]
#[command(about = "Detect circular dependencies between a project's internal modules", long_about = None)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Config file (defaults to depcycle.config.yml in the project directory, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cache mode tag; entries written under another mode are never reused
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Maximum age of a cached result in minutes [default: 60]
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub ttl_minutes: Option<u64>,

    /// Only imports starting with this prefix count as internal (inferred if omitted)
    #[arg(short, long, value_name = "PREFIX")]
    pub namespace_prefix: Option<String>,

    /// Manifest whose modification time fingerprints the project [default: go.mod]
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Cache file location [default: .cicd/circular-dep-cache.json]
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// Time limit for the metadata provider in seconds [default: 300]
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore any cached result and rebuild
    #[arg(long)]
    pub force: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn project_root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
