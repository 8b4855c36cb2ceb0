use super::{BatchRead, LogSource, fill_backwards};

/// Serves records held in memory, newest first.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    records: Vec<Vec<u8>>,
    /// Records at indices `..cursor` have not been read yet.
    cursor: usize,
    batch_limit: usize,
}

impl MemorySource {
    /// `records` are given oldest first, the order they were written in.
    pub fn new(name: impl Into<String>, records: Vec<Vec<u8>>) -> Self {
        let cursor = records.len();
        Self {
            name: name.into(),
            records,
            cursor,
            batch_limit: usize::MAX,
        }
    }

    /// Caps the number of records returned by a single read.
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit.max(1);
        self
    }

    pub fn remaining(&self) -> usize {
        self.cursor
    }

    pub fn rewind(&mut self) {
        self.cursor = self.records.len();
    }
}

impl LogSource for MemorySource {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead {
        let pending = self.records[..self.cursor]
            .iter()
            .rev()
            .take(self.batch_limit)
            .map(|record| Ok(record.as_slice()));

        let (outcome, consumed) = fill_backwards(buf, pending);
        self.cursor -= consumed;
        outcome
    }

    fn name(&self) -> &str {
        &self.name
    }
}
