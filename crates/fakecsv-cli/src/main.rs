mod args;
mod logging;
mod settings;

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use args::Cli;
use fakecsv_generate::{
    GenerateOptions, GenerationEngine, GenerationError, GenerationReport, GenerationRequest,
};
use logging::init_logging;
use settings::{SettingsError, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid flags: {0}")]
    InvalidFlags(GenerationError),
    #[error("Unable to generate CSV data. {0}")]
    InvalidFields(GenerationError),
    #[error("Failed to generate CSV data: {0}")]
    Generation(GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("failed to write report: {0}")]
    ReportIo(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    ReportJson(#[from] serde_json::Error),
}

impl From<GenerationError> for CliError {
    fn from(err: GenerationError) -> Self {
        if err.is_request_error() {
            Self::InvalidFlags(err)
        } else if err.is_field_error() {
            Self::InvalidFields(err)
        } else {
            Self::Generation(err)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_normalized(std::env::args_os());
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(&settings.log_filter, cli.log_json).map_err(CliError::Logging)?;

    let start = Instant::now();

    let request = GenerationRequest::new(
        cli.rows,
        &cli.fields,
        &cli.filename,
        cli.provider_seed(),
    )?;

    println!("Rows: {}", request.rows());
    println!("Fields: {}", request.raw_fields());
    println!("Filename: {}", request.filename());
    println!("Generating CSV file...");

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: settings.out_dir,
    });
    let result = engine.run(&request)?;

    if let Some(report_path) = cli.report.as_deref() {
        write_report(report_path, &result.report)?;
        tracing::info!(path = %report_path.display(), "report written");
    }

    println!("CSV file successfully generated at {}.", result.path.display());
    println!("(Elapsed time: {:.6} seconds)", start.elapsed().as_secs_f64());

    Ok(())
}

fn write_report(path: &Path, report: &GenerationReport) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_vec_pretty(report)?)?;
    Ok(())
}
