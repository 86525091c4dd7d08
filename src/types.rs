use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of one record on disk: three `i32`s back to back, no padding.
pub const RECORD_LEN: usize = 12;

// Reserved `value`s written by stabping in place of a reading.
pub const SENTINEL_ERROR: i32 = -2_100_000_000;
pub const SENTINEL_NODATA: i32 = -2_000_000_000;

/// One record of a stabping data file.
///
/// The viewer treats the three fields positionally. Files written by
/// stabping store the collection time, the address index and the reading,
/// in that order, which is where the field names come from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub time: i32,  // seconds since UNIX epoch
    pub index: i32, // line number in the target's index file
    pub value: i32, // reading, or one of the sentinels
}

impl Record {
    pub fn new(time: i32, index: i32, value: i32) -> Self {
        Self { time, index, value }
    }

    pub fn fields(&self) -> [i32; 3] {
        [self.time, self.index, self.value]
    }
}

/// `%11d %2d %8d`, without the trailing newline.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>11} {:>2} {:>8}", self.time, self.index, self.value)
    }
}

/// Codec settings for records: fixed-width integers, little-endian.
pub fn record_codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}
