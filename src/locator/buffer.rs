use crate::error::BootTimeError;

/// Read buffer owned by one locate call, plus how many of its bytes the last
/// successful read filled.
#[derive(Debug)]
pub struct ScanBuffer {
    buf: Vec<u8>,
    bytes_read: usize,
}

impl ScanBuffer {
    pub fn new(capacity: usize) -> Result<Self, BootTimeError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| BootTimeError::AllocationFailure {
                requested: capacity,
            })?;
        buf.resize(capacity, 0);

        Ok(Self { buf, bytes_read: 0 })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Grows the buffer to exactly `min_size` bytes. The caller guarantees
    /// `min_size` is larger than the current capacity.
    pub fn grow_to(&mut self, min_size: usize) -> Result<(), BootTimeError> {
        let additional = min_size.saturating_sub(self.buf.len());
        self.buf
            .try_reserve_exact(additional)
            .map_err(|_| BootTimeError::AllocationFailure {
                requested: min_size,
            })?;
        self.buf.resize(min_size.max(self.buf.len()), 0);
        self.bytes_read = 0;
        Ok(())
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    #[inline]
    pub fn set_filled(&mut self, bytes_read: usize) {
        self.bytes_read = bytes_read.min(self.buf.len());
    }

    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    #[inline]
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.bytes_read]
    }
}
