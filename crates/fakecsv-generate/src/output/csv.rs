use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::GenerationError;
use crate::output::RowSink;

/// Create `dir` (and parents) and open `dir/filename` for writing.
pub fn create_csv_file(
    dir: &Path,
    filename: &str,
) -> Result<(PathBuf, CsvSink<BufWriter<File>>), GenerationError> {
    create_dir_all(dir).map_err(|source| GenerationError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(filename);
    let file = File::create(&path).map_err(|source| GenerationError::CreateFile {
        path: path.clone(),
        source,
    })?;

    Ok((path, CsvSink::new(BufWriter::new(file))))
}

/// Comma-delimited sink with standard quoting.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<CountingWriter<W>>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(CountingWriter::new(inner));
        Self { writer }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, GenerationError> {
        let counting = self
            .writer
            .into_inner()
            .map_err(|err| GenerationError::Flush(err.into_error().into()))?;
        Ok(counting.inner)
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write_header(&mut self, header: &[String]) -> Result<(), GenerationError> {
        self.writer
            .write_record(header)
            .map_err(GenerationError::WriteHeader)
    }

    fn write_row(&mut self, index: u64, row: &[String]) -> Result<(), GenerationError> {
        self.writer
            .write_record(row)
            .map_err(|source| GenerationError::WriteRow { row: index, source })
    }

    fn finish(&mut self) -> Result<u64, GenerationError> {
        self.writer.flush().map_err(|err| GenerationError::Flush(err.into()))?;
        Ok(self.writer.get_ref().bytes_written())
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
