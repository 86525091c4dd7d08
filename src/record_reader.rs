use crate::error::ViewError;
use crate::types::{record_codec, Record, RECORD_LEN};
use bincode::Options;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads complete records from a stabping data file, front to back.
///
/// A trailing fragment shorter than one record ends the stream the same
/// way a clean end of file does.
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
    records_read: u64,
    lines_written: u64,
    finished: bool,
}

impl RecordReader<File> {
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<Self, ViewError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| ViewError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        if let Ok(meta) = file.metadata() {
            let len = meta.len();
            debug!(
                path = %path.display(),
                bytes = len,
                records = len / RECORD_LEN as u64,
                trailing = len % RECORD_LEN as u64,
                "opened data file"
            );
        }
        Ok(RecordReader::new(file))
    }
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        RecordReader {
            reader: BufReader::new(inner),
            records_read: 0,
            lines_written: 0,
            finished: false,
        }
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Lines `dump_records` has handed to its writer without error.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Returns the next complete record, or `None` at end of data.
    pub fn next_record(&mut self) -> Result<Option<Record>, ViewError> {
        if self.finished {
            return Ok(None);
        }

        let decoded: bincode::Result<Record> = record_codec().deserialize_from(&mut self.reader);
        match decoded {
            Ok(record) => {
                self.records_read += 1;
                Ok(Some(record))
            }
            Err(e) => {
                self.finished = true;
                match *e {
                    bincode::ErrorKind::Io(ref io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
                        debug!(records = self.records_read, "reached EOF or incomplete record, stopping");
                        Ok(None)
                    }
                    _ => Err(ViewError::from_bincode(e)),
                }
            }
        }
    }

    /// Writes one formatted line per record to `out` and returns the line count.
    pub fn dump_records<W: Write>(&mut self, out: &mut W) -> Result<u64, ViewError> {
        let start = self.lines_written;
        while let Some(record) = self.next_record()? {
            writeln!(out, "{}", record).map_err(ViewError::Write)?;
            self.lines_written += 1;
        }
        out.flush().map_err(ViewError::Write)?;
        Ok(self.lines_written - start)
    }

    pub fn read_and_collect(&mut self) -> Result<Vec<Record>, ViewError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok(records)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, ViewError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
