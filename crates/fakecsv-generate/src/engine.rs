use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::assemble::assemble;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::{RowSink, create_csv_file};
use crate::provider::{FakeProvider, FakeRsProvider};
use crate::validate::GenerationRequest;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub path: PathBuf,
    pub report: GenerationReport,
}

/// Counts produced by [`GenerationEngine::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub rows_written: u64,
    pub bytes_written: u64,
}

/// Entry point for turning a validated request into a CSV file.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Create the output file under `out_dir` and fill it.
    ///
    /// Nothing is generated when the directory or file cannot be created. A
    /// failure while writing stops the run; rows already flushed stay on disk.
    pub fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let started_at = chrono::Utc::now().to_rfc3339();

        info!(
            rows = request.rows(),
            fields = %request.raw_fields(),
            seed = request.seed(),
            "generation started"
        );

        let (path, mut sink) = create_csv_file(&self.options.out_dir, request.filename())?;
        info!(path = %path.display(), "output file created");

        let mut provider = FakeRsProvider::from_seed(request.seed());
        let summary = match Self::write(request, &mut provider, &mut sink) {
            Ok(summary) => summary,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "generation failed");
                return Err(err);
            }
        };

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let report = GenerationReport {
            started_at,
            path: path.clone(),
            fields: request.fields().to_vec(),
            seed: request.seed(),
            rows_requested: request.rows(),
            rows_written: summary.rows_written,
            bytes_written: summary.bytes_written,
            duration_ms,
        };

        info!(
            path = %path.display(),
            rows_written = report.rows_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { path, report })
    }

    /// Assemble the request's table from `provider` and stream it into `sink`.
    pub fn write<P, S>(
        request: &GenerationRequest,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<WriteSummary, GenerationError>
    where
        P: FakeProvider + ?Sized,
        S: RowSink,
    {
        let table = assemble(request.fields(), request.rows(), provider);
        sink.write_header(&table.header)?;

        let mut rows_written = 0_u64;
        for row in table.rows {
            sink.write_row(rows_written + 1, &row)?;
            rows_written += 1;
        }

        let bytes_written = sink.finish()?;
        Ok(WriteSummary {
            rows_written,
            bytes_written,
        })
    }
}
