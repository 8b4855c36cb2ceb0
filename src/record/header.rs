/// Fixed part of a classic event log record. The provider name, computer
/// name, SID, strings, data and a trailing copy of `length` follow it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub length: u32,
    pub reserved: u32,
    pub record_number: u32,
    pub time_generated: u32,
    pub time_written: u32,
    pub event_id: u32,
    pub event_type: u16,
    pub num_strings: u16,
    pub event_category: u16,
    pub reserved_flags: u16,
    pub closing_record_number: u32,
    pub string_offset: u32,
    pub user_sid_length: u32,
    pub user_sid_offset: u32,
    pub data_length: u32,
    pub data_offset: u32,
}

impl RecordHeader {
    pub const SIZE: usize = 56;
    /// `LfLe`, stored in `reserved` by the event log service.
    pub const SIGNATURE: u32 = 0x654c_664c;

    pub fn new(record_number: u32, time_generated: u32, event_id: u32) -> Self {
        Self {
            length: Self::SIZE as u32,
            reserved: Self::SIGNATURE,
            record_number,
            time_generated,
            time_written: time_generated,
            event_id,
            event_type: 0,
            num_strings: 0,
            event_category: 0,
            reserved_flags: 0,
            closing_record_number: 0,
            string_offset: 0,
            user_sid_length: 0,
            user_sid_offset: 0,
            data_length: 0,
            data_offset: 0,
        }
    }

    /// Decodes the header at the start of `buf`, or `None` if fewer than
    /// [`RecordHeader::SIZE`] bytes are available.
    pub fn read_from(buf: &[u8]) -> Option<Self> {
        let fixed: &[u8; Self::SIZE] = buf.get(..Self::SIZE)?.try_into().ok()?;
        let u32_at = |at: usize| {
            u32::from_le_bytes([fixed[at], fixed[at + 1], fixed[at + 2], fixed[at + 3]])
        };
        let u16_at = |at: usize| u16::from_le_bytes([fixed[at], fixed[at + 1]]);

        Some(Self {
            length: u32_at(0),
            reserved: u32_at(4),
            record_number: u32_at(8),
            time_generated: u32_at(12),
            time_written: u32_at(16),
            event_id: u32_at(20),
            event_type: u16_at(24),
            num_strings: u16_at(26),
            event_category: u16_at(28),
            reserved_flags: u16_at(30),
            closing_record_number: u32_at(32),
            string_offset: u32_at(36),
            user_sid_length: u32_at(40),
            user_sid_offset: u32_at(44),
            data_length: u32_at(48),
            data_offset: u32_at(52),
        })
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        for word in [
            self.length,
            self.reserved,
            self.record_number,
            self.time_generated,
            self.time_written,
            self.event_id,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        for half in [
            self.event_type,
            self.num_strings,
            self.event_category,
            self.reserved_flags,
        ] {
            out.extend_from_slice(&half.to_le_bytes());
        }
        for word in [
            self.closing_record_number,
            self.string_offset,
            self.user_sid_length,
            self.user_sid_offset,
            self.data_length,
            self.data_offset,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }

    /// Event id with the severity, customer and facility bits masked off.
    #[inline]
    pub fn event_code(&self) -> u16 {
        (self.event_id & 0xFFFF) as u16
    }

    #[inline]
    pub fn total_size(&self) -> usize {
        self.length as usize
    }
}
