use crate::scan::MatchCriteria;

pub const DEFAULT_SOURCE_NAME: &str = "System";
/// 64 KiB, the size the event log API documents for a read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 0x10000;
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub source_name: String,
    pub criteria: MatchCriteria,
    pub initial_buffer_size: usize,
    pub max_buffer_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_owned(),
            criteria: MatchCriteria::boot(),
            initial_buffer_size: DEFAULT_BUFFER_SIZE,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

impl ScanConfig {
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_criteria(mut self, criteria: MatchCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_initial_buffer_size(mut self, size: usize) -> Self {
        self.initial_buffer_size = size;
        self
    }

    pub fn with_max_buffer_size(mut self, size: usize) -> Self {
        self.max_buffer_size = size;
        self
    }

    /// Initial capacity actually allocated: at least one byte and never
    /// above the growth limit.
    pub fn effective_initial_size(&self) -> usize {
        self.initial_buffer_size
            .max(1)
            .min(self.max_buffer_size.max(1))
    }
}
