use super::RecordHeader;

/// A record borrowed from a read buffer. `body` is everything after the fixed
/// header, up to and including the trailing length copy.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub header: RecordHeader,
    pub body: &'a [u8],
}

impl<'a> RecordView<'a> {
    /// `record` must span exactly one record; the caller has already checked
    /// that its length field is plausible.
    pub fn new(header: RecordHeader, record: &'a [u8]) -> Self {
        let body = record.get(RecordHeader::SIZE..).unwrap_or_default();
        Self { header, body }
    }

    /// UTF-16 code units of the provider name, without the terminator.
    /// `None` when the name is not terminated inside the record.
    pub fn provider_units(&self) -> Option<impl Iterator<Item = u16> + 'a> {
        let units = self
            .body
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        let len = units.clone().position(|unit| unit == 0)?;
        Some(units.take(len))
    }

    /// Compares the provider name with `name`, unit by unit.
    pub fn provider_is(&self, name: &[u16]) -> bool {
        match self.provider_units() {
            Some(units) => units.eq(name.iter().copied()),
            None => false,
        }
    }

    pub fn provider_name(&self) -> Option<String> {
        let units: Vec<u16> = self.provider_units()?.collect();
        Some(String::from_utf16_lossy(&units))
    }

    #[inline]
    pub fn total_size(&self) -> usize {
        self.header.total_size()
    }
}
