//! Batch-reading driver: reads the log newest first, grows the read buffer
//! whenever the source asks for more room, and scans each batch until the
//! boot record turns up or the log runs out.

pub mod buffer;
pub mod config;

pub use buffer::ScanBuffer;
pub use config::ScanConfig;

use crate::boot_time::BootTime;
use crate::error::BootTimeError;
use crate::scan::find_record;
use crate::source::{self, BatchRead, LogSource};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    Reading,
    Found(BootTime),
    Exhausted,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocateStats {
    pub batches_read: u64,
    pub bytes_scanned: u64,
    pub buffer_grows: u64,
    pub final_capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateReport {
    pub boot_time: Option<BootTime>,
    pub stats: LocateStats,
}

#[derive(Debug, Clone, Default)]
pub struct BootTimeLocator {
    config: ScanConfig,
}

impl BootTimeLocator {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The error a caller gets when the log held no matching record.
    pub fn not_found(&self) -> BootTimeError {
        BootTimeError::NotFound {
            log: self.config.source_name.clone(),
            provider: self.config.criteria.provider().to_owned(),
            event_id: self.config.criteria.event_id(),
        }
    }

    /// Opens the configured system log and scans it.
    pub fn locate(&self) -> Result<Option<BootTime>, BootTimeError> {
        let log = source::open_system_log(&self.config.source_name).map_err(|cause| {
            BootTimeError::SourceUnavailable {
                log: self.config.source_name.clone(),
                cause,
            }
        })?;
        self.locate_in(log)
    }

    /// `Ok(None)` means the log was read to the end without a match.
    pub fn locate_in<S: LogSource>(&self, source: S) -> Result<Option<BootTime>, BootTimeError> {
        self.scan(source).map(|report| report.boot_time)
    }

    pub fn scan<S: LogSource>(&self, mut source: S) -> Result<LocateReport, BootTimeError> {
        let mut buffer = ScanBuffer::new(self.config.effective_initial_size())?;
        let mut stats = LocateStats::default();

        debug!(
            source = source.name(),
            provider = self.config.criteria.provider(),
            event_id = self.config.criteria.event_id(),
            capacity = buffer.capacity(),
            "scanning log"
        );

        let boot_time = loop {
            match self.step(&mut source, &mut buffer, &mut stats)? {
                ReadState::Reading => continue,
                ReadState::Found(boot_time) => break Some(boot_time),
                ReadState::Exhausted => break None,
            }
        };

        stats.final_capacity = buffer.capacity();
        match boot_time {
            Some(boot_time) => debug!(%boot_time, batches = stats.batches_read, "boot record found"),
            None => debug!(batches = stats.batches_read, "log exhausted without a boot record"),
        }

        Ok(LocateReport { boot_time, stats })
    }

    fn step<S: LogSource>(
        &self,
        source: &mut S,
        buffer: &mut ScanBuffer,
        stats: &mut LocateStats,
    ) -> Result<ReadState, BootTimeError> {
        match source.read_batch(buffer.as_mut_slice()) {
            BatchRead::BufferTooSmall { required } => {
                self.grow(buffer, required)?;
                stats.buffer_grows += 1;
                Ok(ReadState::Reading)
            }
            BatchRead::EndOfLog | BatchRead::Filled(0) => Ok(ReadState::Exhausted),
            BatchRead::Failed(err) => {
                warn!(source = source.name(), %err, "log read failed, treating log as exhausted");
                Ok(ReadState::Exhausted)
            }
            BatchRead::Filled(bytes_read) => {
                buffer.set_filled(bytes_read);
                stats.batches_read += 1;
                stats.bytes_scanned += buffer.bytes_read() as u64;
                debug!(bytes_read = buffer.bytes_read(), "scanning batch");

                let found = find_record(buffer.filled(), buffer.bytes_read(), &self.config.criteria)?;
                Ok(match found {
                    Some(record) => ReadState::Found(BootTime(record.header.time_generated)),
                    None => ReadState::Reading,
                })
            }
        }
    }

    fn grow(&self, buffer: &mut ScanBuffer, required: usize) -> Result<(), BootTimeError> {
        let capacity = buffer.capacity();
        if required <= capacity {
            return Err(BootTimeError::GrowthStalled { required, capacity });
        }
        if required > self.config.max_buffer_size {
            return Err(BootTimeError::BufferLimitExceeded {
                required,
                limit: self.config.max_buffer_size,
            });
        }

        debug!(from = capacity, to = required, "growing read buffer");
        buffer.grow_to(required)
    }
}
