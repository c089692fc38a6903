//! Configuration file support for depcycle.
//!
//! Provides YAML-based configuration through `depcycle.config.yml` files,
//! and resolves the effective settings with precedence
//! CLI flag > config file > built-in default.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::process::DEFAULT_PROVIDER_COMMAND;
use crate::application::dto::{CheckRequest, OutputFormat};
use crate::cli::Args;
use crate::shared::error::CycleCheckError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depcycle.config.yml";

pub const DEFAULT_MODE: &str = "circular";
pub const DEFAULT_TTL_MINUTES: u64 = 60;
pub const DEFAULT_MANIFEST: &str = "go.mod";
pub const DEFAULT_CACHE_FILE: &str = ".cicd/circular-dep-cache.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mode: Option<String>,
    pub ttl_minutes: Option<u64>,
    pub namespace_prefix: Option<String>,
    pub manifest: Option<PathBuf>,
    pub cache_file: Option<PathBuf>,
    pub provider_command: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(mode) = &config.mode {
        if mode.trim().is_empty() {
            bail!(
                "Invalid config: mode must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default mode \"{}\".",
                DEFAULT_MODE
            );
        }
    }

    if let Some(prefix) = &config.namespace_prefix {
        if prefix.trim().is_empty() {
            bail!(
                "Invalid config: namespace_prefix must not be empty.\n\n\
                 💡 Hint: Remove the key to infer the prefix from the first module."
            );
        }
    }

    if config.ttl_minutes == Some(0) {
        bail!("Invalid config: ttl_minutes must be at least 1.");
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be at least 1.");
    }

    if let Some(command) = &config.provider_command {
        if command.first().map_or(true, |program| program.trim().is_empty()) {
            bail!(
                "Invalid config: provider_command must name a program.\n\n\
                 💡 Hint: e.g. provider_command: [\"go\", \"list\", \"-json\", \"./...\"]"
            );
        }
    }

    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI flags, config file, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_root: PathBuf,
    pub mode: String,
    pub ttl_minutes: u64,
    pub namespace_prefix: Option<String>,
    pub manifest_path: PathBuf,
    pub cache_path: PathBuf,
    pub provider_command: Vec<String>,
    pub timeout: Duration,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub force_rebuild: bool,
}

impl Settings {
    /// Merges CLI arguments over an optional config file.
    ///
    /// Relative manifest and cache paths are resolved against the project root.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let project_root = args.project_root();

        let mode = args
            .mode
            .clone()
            .or(config.mode)
            .unwrap_or_else(|| DEFAULT_MODE.to_string());
        if mode.trim().is_empty() {
            return Err(validation("mode must not be empty"));
        }

        let namespace_prefix = args.namespace_prefix.clone().or(config.namespace_prefix);
        if namespace_prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(validation("namespace prefix must not be empty"));
        }

        let ttl_minutes = args
            .ttl_minutes
            .or(config.ttl_minutes)
            .unwrap_or(DEFAULT_TTL_MINUTES);
        let timeout_secs = args
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let manifest = args
            .manifest
            .clone()
            .or(config.manifest)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));
        let cache_file = args
            .cache_file
            .clone()
            .or(config.cache_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE));

        let provider_command = config.provider_command.unwrap_or_else(|| {
            DEFAULT_PROVIDER_COMMAND
                .iter()
                .map(|part| part.to_string())
                .collect()
        });

        let format = match (args.format, config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(|e: String| validation(&e))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            manifest_path: resolve_against(&project_root, manifest),
            cache_path: resolve_against(&project_root, cache_file),
            project_root,
            mode,
            ttl_minutes,
            namespace_prefix,
            provider_command,
            timeout: Duration::from_secs(timeout_secs),
            format,
            output: args.output.clone(),
            force_rebuild: args.force,
        })
    }

    /// Builds the use case request from these settings.
    pub fn to_request(&self) -> Result<CheckRequest> {
        let ttl = i64::try_from(self.ttl_minutes)
            .ok()
            .and_then(chrono::Duration::try_minutes)
            .ok_or_else(|| validation("ttl is too large"))?;

        let mut request = CheckRequest::new(
            self.project_root.clone(),
            self.mode.clone(),
            ttl,
            self.manifest_path.clone(),
            self.cache_path.clone(),
        )
        .with_force_rebuild(self.force_rebuild);

        if let Some(prefix) = &self.namespace_prefix {
            request = request.with_namespace_prefix(prefix.clone());
        }

        Ok(request)
    }
}

fn resolve_against(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn validation(message: &str) -> anyhow::Error {
    CycleCheckError::Validation {
        message: message.to_string(),
    }
    .into()
}
