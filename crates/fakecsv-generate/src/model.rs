use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fields::FieldKind;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the CSV file is written into. Created when absent.
    pub out_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("output"),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub started_at: String,
    pub path: PathBuf,
    pub fields: Vec<FieldKind>,
    pub seed: u64,
    pub rows_requested: u64,
    pub rows_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
