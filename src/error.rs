use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub const USAGE: &str = "Please provide a stabping *.dat file as first argument";

/// Everything that can stop a viewer. All of these end the process.
#[derive(Debug)]
pub enum ViewError {
    Usage,
    FileOpen { path: PathBuf, source: io::Error },
    Read(io::Error),
    Write(io::Error),
    Decode(String),
}

impl ViewError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewError::Usage => 2,
            _ => 1,
        }
    }

    pub(crate) fn from_bincode(e: bincode::Error) -> Self {
        match *e {
            bincode::ErrorKind::Io(io_err) => ViewError::Read(io_err),
            other => ViewError::Decode(other.to_string()),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Usage => f.write_str(USAGE),
            ViewError::FileOpen { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            ViewError::Read(e) => write!(f, "read failed: {}", e),
            ViewError::Write(e) => write!(f, "write failed: {}", e),
            ViewError::Decode(msg) => write!(f, "malformed record: {}", msg),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ViewError::FileOpen { source, .. } => Some(source),
            ViewError::Read(e) | ViewError::Write(e) => Some(e),
            ViewError::Usage | ViewError::Decode(_) => None,
        }
    }
}
