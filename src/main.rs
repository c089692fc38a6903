use depcycle::adapters::outbound::clock::SystemClock;
use depcycle::adapters::outbound::console::StderrProgressReporter;
use depcycle::adapters::outbound::filesystem::{FileSystemReader, JsonCacheFileStore};
use depcycle::adapters::outbound::process::CommandMetadataProvider;
use depcycle::application::dto::OutputFormat;
use depcycle::application::factories::{FormatterFactory, PresenterFactory, ReportDestination};
use depcycle::application::use_cases::CheckCircularDependenciesUseCase;
use depcycle::cli::Args;
use depcycle::config::{discover_config, load_config_from_path, Settings};
use depcycle::shared::error::{CycleCheckError, ExitCode};
use depcycle::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let project_root = args.project_root();
    validate_project_path(&project_root)?;

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&project_root)?,
    };
    let settings = Settings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let provider = CommandMetadataProvider::new(&settings.provider_command, settings.timeout)?;
    let use_case = CheckCircularDependenciesUseCase::new(
        provider,
        SystemClock::new(),
        FileSystemReader::new(),
        JsonCacheFileStore::new(),
        StderrProgressReporter::new(),
    );

    eprintln!(
        "🔍 Checking circular dependencies in {} (mode: {})",
        settings.project_root.display(),
        settings.mode
    );

    let response = use_case.execute(&settings.to_request()?).await?;

    let destination = ReportDestination::from(settings.output.clone());
    let colored = settings.format == OutputFormat::Text
        && destination.is_stdout()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let report = FormatterFactory::create(settings.format, colored).format(&response)?;

    PresenterFactory::create(destination).present(&report)?;

    Ok(if response.has_cycles() {
        ExitCode::CyclesDetected
    } else {
        ExitCode::Success
    })
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| CycleCheckError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        )
        .into());
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}
