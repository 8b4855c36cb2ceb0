use crate::record::RecordView;

/// Provider name and event id a record has to carry to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    provider: String,
    provider_units: Vec<u16>,
    event_id: u16,
}

impl MatchCriteria {
    pub const BOOT_PROVIDER: &'static str = "EventLog";
    /// "The Event log service was started."
    pub const BOOT_EVENT_ID: u16 = 6005;

    pub fn new(provider: impl Into<String>, event_id: u16) -> Self {
        let provider = provider.into();
        let provider_units = provider.encode_utf16().collect();
        Self {
            provider,
            provider_units,
            event_id,
        }
    }

    pub fn boot() -> Self {
        Self::new(Self::BOOT_PROVIDER, Self::BOOT_EVENT_ID)
    }

    #[inline]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[inline]
    pub fn event_id(&self) -> u16 {
        self.event_id
    }

    #[inline]
    pub fn matches(&self, record: &RecordView<'_>) -> bool {
        record.provider_is(&self.provider_units) && record.header.event_code() == self.event_id
    }
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self::boot()
    }
}
