use crate::error::ViewError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A target's index -> address mapping. Line `n` of the index file holds the
/// address whose records carry `index == n`.
#[derive(Debug, Default)]
pub struct IndexFile {
    data: Vec<String>,
    map: HashMap<String, i32>,
}

impl IndexFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ViewError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ViewError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let index = IndexFile::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), addrs = index.len(), "loaded index file");
        Ok(index)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ViewError> {
        let mut index = IndexFile::default();
        for line in reader.lines() {
            index.push(line.map_err(ViewError::Read)?);
        }
        Ok(index)
    }

    fn push(&mut self, addr: String) {
        let i = self.data.len() as i32;
        // the first occurrence keeps the reverse mapping
        self.map.entry(addr.clone()).or_insert(i);
        self.data.push(addr);
    }

    pub fn get_addr(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.data.get(i))
            .map(String::as_str)
    }

    pub fn get_index(&self, addr: &str) -> Option<i32> {
        self.map.get(addr).copied()
    }

    /// Every index in file order.
    pub fn indices(&self) -> Vec<i32> {
        (0..self.data.len() as i32).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
