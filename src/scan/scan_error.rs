use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("corrupt record at offset {offset}: length {length} is {reason}")]
    CorruptRecord {
        offset: usize,
        length: u32,
        reason: &'static str,
    },

    #[error("truncated record header at offset {offset}: {available} bytes left")]
    TruncatedHeader { offset: usize, available: usize },
}

impl ScanError {
    pub fn offset(&self) -> usize {
        match self {
            Self::CorruptRecord { offset, .. } | Self::TruncatedHeader { offset, .. } => *offset,
        }
    }
}
