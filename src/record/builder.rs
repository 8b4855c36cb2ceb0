use super::RecordHeader;

/// Serialises a well-formed record: header, provider and computer names,
/// payload, DWORD padding and the trailing length copy.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    header: RecordHeader,
    provider: String,
    computer: String,
    data: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(provider: impl Into<String>, event_id: u32, time_generated: u32) -> Self {
        Self {
            header: RecordHeader::new(0, time_generated, event_id),
            provider: provider.into(),
            computer: String::from("LOCALHOST"),
            data: Vec::new(),
        }
    }

    pub fn record_number(mut self, record_number: u32) -> Self {
        self.header.record_number = record_number;
        self
    }

    pub fn computer(mut self, computer: impl Into<String>) -> Self {
        self.computer = computer.into();
        self
    }

    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut names = Vec::new();
        for name in [&self.provider, &self.computer] {
            for unit in name.encode_utf16().chain(std::iter::once(0)) {
                names.extend_from_slice(&unit.to_le_bytes());
            }
        }

        let data_offset = RecordHeader::SIZE + names.len();
        let unpadded = data_offset + self.data.len();
        let padded = unpadded.next_multiple_of(4);
        let length = padded + 4;

        let mut header = self.header;
        header.length = length as u32;
        header.string_offset = data_offset as u32;
        header.user_sid_offset = data_offset as u32;
        header.data_offset = data_offset as u32;
        header.data_length = self.data.len() as u32;

        let mut out = Vec::with_capacity(length);
        header.write_to(&mut out);
        out.extend_from_slice(&names);
        out.extend_from_slice(&self.data);
        out.resize(padded, 0);
        out.extend_from_slice(&header.length.to_le_bytes());
        out
    }
}
