use crate::ports::outbound::{MetadataProvider, ProviderOutput};
use crate::shared::error::CycleCheckError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default provider invocation for Go modules
pub const DEFAULT_PROVIDER_COMMAND: [&str; 4] = ["go", "list", "-json", "./..."];

/// Longest stderr excerpt attached to a failure or passed on as diagnostics
const MAX_STDERR_EXCERPT: usize = 4096;

/// CommandMetadataProvider adapter running an external command
///
/// The command runs in the project root and its stdout is taken as the
/// record stream. The child is killed if it outlives `timeout`.
pub struct CommandMetadataProvider {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandMetadataProvider {
    /// Creates a provider from a program and its arguments
    ///
    /// # Errors
    /// Returns a `Validation` error if `command` is empty.
    pub fn new(command: &[String], timeout: Duration) -> Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| CycleCheckError::Validation {
            message: "Provider command must not be empty".to_string(),
        })?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout,
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn stderr_excerpt(stderr: &[u8]) -> String {
        String::from_utf8_lossy(stderr)
            .trim()
            .chars()
            .take(MAX_STDERR_EXCERPT)
            .collect()
    }

    fn tool_error(&self, details: impl Into<String>) -> anyhow::Error {
        CycleCheckError::ExternalTool {
            command: self.command_line(),
            details: details.into(),
        }
        .into()
    }
}

#[async_trait]
impl MetadataProvider for CommandMetadataProvider {
    async fn fetch_records(&self, project_root: &Path) -> Result<ProviderOutput> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.tool_error(format!("failed to start: {}", e)))?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| self.tool_error(e.to_string()))?,
            Err(_) => {
                return Err(CycleCheckError::ExternalToolTimeout {
                    command: self.command_line(),
                    timeout: self.timeout,
                }
                .into())
            }
        };

        let excerpt = Self::stderr_excerpt(&output.stderr);

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            let details = if excerpt.is_empty() {
                status
            } else {
                format!("{}: {}", status, excerpt)
            };
            return Err(self.tool_error(details));
        }

        let records = String::from_utf8(output.stdout)
            .map_err(|e| self.tool_error(format!("output is not valid UTF-8: {}", e)))?;

        Ok(ProviderOutput::new(records).with_diagnostics(&excerpt))
    }

    fn describe(&self) -> String {
        format!("`{}`", self.command_line())
    }
}
