use super::{MatchCriteria, ScanError};
use crate::record::{RecordHeader, RecordView};
use tracing::{trace, warn};

/// Walks the records packed into `buf[..end]` in offset order.
///
/// Every length field is validated before it is used to advance. The first
/// implausible one is yielded as an error and ends the iteration.
pub struct RecordIter<'a> {
    buf: &'a [u8],
    offset: usize,
    end: usize,
}

impl<'a> RecordIter<'a> {
    pub fn new(buf: &'a [u8], bytes_valid: usize) -> Self {
        Self {
            buf,
            offset: 0,
            end: bytes_valid.min(buf.len()),
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn record_at(&self, offset: usize) -> Result<RecordView<'a>, ScanError> {
        let rest = &self.buf[offset..self.end];

        if let Some(prefix) = rest.first_chunk::<4>() {
            if u32::from_le_bytes(*prefix) == 0 {
                return Err(ScanError::CorruptRecord {
                    offset,
                    length: 0,
                    reason: "zero",
                });
            }
        }

        let header = RecordHeader::read_from(rest).ok_or(ScanError::TruncatedHeader {
            offset,
            available: rest.len(),
        })?;

        let length = header.total_size();
        if length < RecordHeader::SIZE {
            return Err(ScanError::CorruptRecord {
                offset,
                length: header.length,
                reason: "smaller than the fixed header",
            });
        }
        if length > rest.len() {
            return Err(ScanError::CorruptRecord {
                offset,
                length: header.length,
                reason: "past the end of the batch",
            });
        }

        Ok(RecordView::new(header, &rest[..length]))
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Result<RecordView<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.end {
            return None;
        }

        match self.record_at(self.offset) {
            Ok(record) => {
                self.offset += record.total_size();
                Some(Ok(record))
            }
            Err(err) => {
                self.offset = self.end;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let max_records = (self.end - self.offset).div_ceil(RecordHeader::SIZE);
        (0, Some(max_records))
    }
}

/// Returns the first record in `buf[..bytes_valid]` that matches `criteria`.
///
/// `Ok(None)` means the batch is well-formed but holds no match.
pub fn find_record<'a>(
    buf: &'a [u8],
    bytes_valid: usize,
    criteria: &MatchCriteria,
) -> Result<Option<RecordView<'a>>, ScanError> {
    for record in RecordIter::new(buf, bytes_valid) {
        let record = record.inspect_err(|err| warn!(%err, "aborting batch scan"))?;
        trace!(
            record_number = record.header.record_number,
            event_id = record.header.event_code(),
            "visiting record"
        );
        if criteria.matches(&record) {
            return Ok(Some(record));
        }
    }
    Ok(None)
}
