use super::{BatchRead, LogSource, fill_backwards};
use crate::record::RecordHeader;
use memmap2::{Mmap, MmapMut};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

/// Replays a file of raw records, stored oldest first, as if it were a live
/// event log.
///
/// Reads walk the file from the end using the length copy that closes every
/// record, so batches come out newest first.
///
/// A corrupt trailer surfaces as [`BatchRead::Failed`], which the locator
/// treats like the end of the log: a damaged dump reads as "not found".
pub struct DumpSource {
    name: String,
    map: Option<Mmap>,
    cursor: usize,
}

impl DumpSource {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = usize::try_from(file.metadata()?.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is too large to map", path.display()),
            )
        })?;

        // Zero-length mappings are rejected on some platforms.
        let map = if len == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };

        debug!(path = %path.display(), bytes = len, "opened record dump");

        Ok(Self {
            name: path.display().to_string(),
            map,
            cursor: len,
        })
    }

    /// Writes `records` back to back into a new dump file at `path`.
    pub fn create<P, R>(path: P, records: &[R]) -> io::Result<()>
    where
        P: AsRef<Path>,
        R: AsRef<[u8]>,
    {
        let total: usize = records.iter().map(|r| r.as_ref().len()).sum();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(total as u64)?;

        if total == 0 {
            return Ok(());
        }

        let mut map = unsafe { MmapMut::map_mut(&file)? };
        let mut offset = 0;
        for record in records {
            let record = record.as_ref();
            map[offset..offset + record.len()].copy_from_slice(record);
            offset += record.len();
        }
        map.flush()
    }

    /// Bytes of the dump that have not been read yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor
    }

    fn data(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }
}

impl LogSource for DumpSource {
    fn read_batch(&mut self, buf: &mut [u8]) -> BatchRead {
        let records = BackwardRecords {
            data: self.data(),
            cursor: self.cursor,
        };

        let (outcome, _) = fill_backwards(buf, records);
        if let BatchRead::Filled(n) = outcome {
            self.cursor -= n;
        }
        outcome
    }

    fn name(&self) -> &str {
        &self.name
    }
}

struct BackwardRecords<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> BackwardRecords<'a> {
    fn record_ending_at(&self, end: usize) -> io::Result<&'a [u8]> {
        let trailer = end
            .checked_sub(4)
            .and_then(|start| self.data[start..end].first_chunk::<4>())
            .ok_or_else(|| invalid(end, "truncated length trailer"))?;
        let length = u32::from_le_bytes(*trailer) as usize;

        if length < RecordHeader::SIZE + 4 || length > end {
            return Err(invalid(end, "implausible trailing length"));
        }

        let record = &self.data[end - length..end];
        match RecordHeader::read_from(record) {
            Some(header) if header.total_size() == length => Ok(record),
            _ => Err(invalid(end, "header length disagrees with trailer")),
        }
    }
}

impl<'a> Iterator for BackwardRecords<'a> {
    type Item = io::Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == 0 {
            return None;
        }

        match self.record_ending_at(self.cursor) {
            Ok(record) => {
                self.cursor -= record.len();
                Some(Ok(record))
            }
            Err(err) => {
                self.cursor = 0;
                Some(Err(err))
            }
        }
    }
}

fn invalid(end: usize, reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("record dump corrupt before byte {end}: {reason}"),
    )
}
