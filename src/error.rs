use crate::output::EncodeError;
use crate::scan::ScanError;
use std::io;
use thiserror::Error;

/// Status returned by the C entry point on success.
pub const STATUS_OK: i32 = 0;
/// The encoded timestamp does not fit the caller's buffer.
pub const STATUS_OVERFLOW: i32 = -1;
/// The log holds no matching record.
pub const STATUS_NOT_FOUND: i32 = -2;
/// The log could not be opened or read.
pub const STATUS_SYSTEM_ERROR: i32 = -3;
/// A required pointer argument was null.
pub const STATUS_INVALID_ARGUMENT: i32 = -4;

#[derive(Debug, Error)]
pub enum BootTimeError {
    #[error("event log {log:?} unavailable: {cause}")]
    SourceUnavailable {
        log: String,
        #[source]
        cause: io::Error,
    },

    #[error("no record from {provider:?} with event id {event_id} in {log:?}")]
    NotFound {
        log: String,
        provider: String,
        event_id: u16,
    },

    #[error("could not allocate a {requested} byte read buffer")]
    AllocationFailure { requested: usize },

    #[error("log asked for {required} bytes but the buffer already holds {capacity}")]
    GrowthStalled { required: usize, capacity: usize },

    #[error("log asked for {required} bytes, above the {limit} byte limit")]
    BufferLimitExceeded { required: usize, limit: usize },

    #[error(transparent)]
    Corrupt(#[from] ScanError),

    #[error(transparent)]
    Encoding(#[from] EncodeError),
}

impl BootTimeError {
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Status code reported through the C entry point.
    pub fn status(&self) -> i32 {
        match self {
            Self::NotFound { .. } => STATUS_NOT_FOUND,
            Self::Encoding(_) => STATUS_OVERFLOW,
            Self::SourceUnavailable { .. }
            | Self::AllocationFailure { .. }
            | Self::GrowthStalled { .. }
            | Self::BufferLimitExceeded { .. }
            | Self::Corrupt(_) => STATUS_SYSTEM_ERROR,
        }
    }
}
