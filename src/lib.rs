pub mod dumper;
pub mod error;
pub mod index_file;
pub mod logging;
pub mod record_reader;
pub mod record_writer;
pub mod types;
pub mod window;

pub use dumper::run;
pub use error::ViewError;
pub use index_file::IndexFile;
pub use record_reader::RecordReader;
pub use record_writer::RecordWriter;
pub use types::{Record, RECORD_LEN, SENTINEL_ERROR, SENTINEL_NODATA};
pub use window::{records_in_window, segments, TimeSegment};
