// stabping appends each collection round with one timestamp, so records in
// a data file are ordered by `time`. Both functions here rely on that.

use crate::types::{Record, SENTINEL_NODATA};

/// Every record with `lower <= time <= upper`, including all records that
/// share a boundary time.
pub fn records_in_window(records: &[Record], lower: i32, upper: i32) -> &[Record] {
    if lower > upper {
        return &[];
    }
    let begin = records.partition_point(|r| r.time < lower);
    let end = records.partition_point(|r| r.time <= upper);
    &records[begin..end]
}

/// One collection round laid out in address order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSegment {
    pub time: i32,
    pub values: Vec<i32>,
}

/// Groups consecutive records of equal time. `values[k]` holds the value for
/// address index `order[k]`, or `SENTINEL_NODATA` when that round has none.
pub fn segments(records: &[Record], order: &[i32]) -> Vec<TimeSegment> {
    let mut out: Vec<TimeSegment> = Vec::new();

    for record in records {
        let slot = match order.iter().position(|&i| i == record.index) {
            Some(slot) => slot,
            None => continue,
        };

        match out.last_mut() {
            Some(seg) if seg.time == record.time => seg.values[slot] = record.value,
            _ => {
                let mut values = vec![SENTINEL_NODATA; order.len()];
                values[slot] = record.value;
                out.push(TimeSegment {
                    time: record.time,
                    values,
                });
            }
        }
    }

    out
}
