//! Log sources the locator can read record batches from.
//!
//! Every source reads newest-first and sequentially. A source is opened by its
//! constructor and closed when dropped.

pub mod dump;
#[cfg(windows)]
pub mod eventlog;
pub mod memory;

pub use dump::DumpSource;
#[cfg(windows)]
pub use eventlog::EventLog;
pub use memory::MemorySource;

use std::io;

/// Outcome of one batch read.
#[derive(Debug)]
pub enum BatchRead {
    /// `n` bytes of whole records were written to the front of the buffer.
    Filled(usize),
    /// The next record needs `required` bytes. The cursor did not move.
    BufferTooSmall { required: usize },
    EndOfLog,
    Failed(io::Error),
}

pub trait LogSource: Send {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead;

    fn name(&self) -> &str;
}

impl<S: LogSource + ?Sized> LogSource for &mut S {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead {
        (**self).read_batch(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: LogSource + ?Sized> LogSource for Box<S> {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead {
        (**self).read_batch(buf)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Opens the named log of the running system.
#[cfg(windows)]
pub fn open_system_log(source_name: &str) -> io::Result<Box<dyn LogSource>> {
    Ok(Box::new(EventLog::open(source_name)?))
}

/// Opens the named log of the running system.
#[cfg(not(windows))]
pub fn open_system_log(source_name: &str) -> io::Result<Box<dyn LogSource>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("no system event log named {source_name:?} on this platform"),
    ))
}

/// Copies whole records from `records` (newest first) into `buf` for as long
/// as they fit. Returns the outcome and how many records were consumed.
///
/// A read error or an empty record after at least one record ends the batch
/// early; the source reports it again on the next read.
pub(crate) fn fill_backwards<'r, I>(buf: &mut [u8], records: I) -> (BatchRead, usize)
where
    I: IntoIterator<Item = io::Result<&'r [u8]>>,
{
    let mut written = 0;
    let mut consumed = 0;
    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(err) if consumed == 0 => return (BatchRead::Failed(err), 0),
            Err(_) => break,
        };

        if record.is_empty() {
            if consumed == 0 {
                let err = io::Error::new(io::ErrorKind::InvalidData, "empty record in log");
                return (BatchRead::Failed(err), 0);
            }
            break;
        }

        let end = written + record.len();
        if end > buf.len() {
            if consumed == 0 {
                let required = record.len();
                return (BatchRead::BufferTooSmall { required }, 0);
            }
            break;
        }

        buf[written..end].copy_from_slice(record);
        written = end;
        consumed += 1;
    }

    if consumed == 0 {
        (BatchRead::EndOfLog, 0)
    } else {
        (BatchRead::Filled(written), consumed)
    }
}
