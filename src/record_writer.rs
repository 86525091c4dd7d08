use crate::error::ViewError;
use crate::types::{record_codec, Record};
use bincode::Options;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Appends records to a stabping data file in the on-disk layout the
/// readers expect.
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: u64,
}

impl RecordWriter<File> {
    /// Opens `file_path` for appending, creating it when missing.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<Self, ViewError> {
        let path = file_path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| ViewError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "opened data file for append");
        Ok(RecordWriter::new(file))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        RecordWriter {
            writer: BufWriter::new(inner),
            records_written: 0,
        }
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn append(&mut self, record: &Record) -> Result<(), ViewError> {
        record_codec()
            .serialize_into(&mut self.writer, record)
            .map_err(|e| match *e {
                bincode::ErrorKind::Io(io_err) => ViewError::Write(io_err),
                other => ViewError::Decode(other.to_string()),
            })?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes one collection round: a record per `(index, value)` pair, all
    /// stamped with `time`.
    pub fn append_results(&mut self, time: i32, results: &[(i32, i32)]) -> Result<(), ViewError> {
        for &(index, value) in results {
            self.append(&Record::new(time, index, value))?;
        }
        Ok(())
    }

    pub fn finalize(&mut self) -> Result<(), ViewError> {
        self.writer.flush().map_err(ViewError::Write)?;
        debug!(records = self.records_written, "flushed data file");
        Ok(())
    }
}
