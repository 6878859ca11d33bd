pub mod csv;

pub use self::csv::{CsvSink, create_csv_file};

use crate::errors::GenerationError;

/// Destination for a header and a stream of rows.
pub trait RowSink {
    fn write_header(&mut self, header: &[String]) -> Result<(), GenerationError>;

    /// `index` is the 1-based data row number, used for error reporting.
    fn write_row(&mut self, index: u64, row: &[String]) -> Result<(), GenerationError>;

    /// Flush buffered output and return the number of bytes written.
    fn finish(&mut self) -> Result<u64, GenerationError>;
}
