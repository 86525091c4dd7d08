use crate::error::ViewError;
use crate::record_reader::RecordReader;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Dumps the data file named by `args[1]` to `out`, one line per record.
///
/// `args` is the full command line, program name included. Anything other
/// than exactly one path is a usage error and no file is opened. Returns the
/// number of lines written.
pub fn run<S: AsRef<OsStr>, W: Write>(args: &[S], out: &mut W) -> Result<u64, ViewError> {
    if args.len() != 2 {
        return Err(ViewError::Usage);
    }

    let path = Path::new(&args[1]);
    let mut reader = RecordReader::open(path)?;

    match reader.dump_records(out) {
        Err(ViewError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!(lines = reader.lines_written(), "output closed, stopping");
            Ok(reader.lines_written())
        }
        result => result,
    }
}
