use chrono::{DateTime, Utc};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds since 1970-01-01T00:00:00Z at which the event log service last
/// started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BootTime(pub u32);

impl BootTime {
    #[inline]
    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.0))
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from(self.to_system_time())
    }
}

impl From<u32> for BootTime {
    fn from(seconds: u32) -> Self {
        Self(seconds)
    }
}

/// Decimal seconds, the form handed across the C boundary.
impl fmt::Display for BootTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
