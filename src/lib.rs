pub mod boot_time;
pub mod error;
pub mod locator;
pub mod output;
pub mod record;
pub mod scan;
pub mod source;

pub use boot_time::BootTime;
pub use error::BootTimeError;
pub use locator::{BootTimeLocator, ScanConfig};
pub use scan::MatchCriteria;

/// Last boot time of this machine, read from the `System` event log.
pub fn last_bootup_time() -> Result<BootTime, BootTimeError> {
    let locator = BootTimeLocator::default();
    locator.locate()?.ok_or_else(|| locator.not_found())
}

/// [`last_bootup_time`] as decimal seconds since the Unix epoch.
pub fn get() -> Result<String, BootTimeError> {
    last_bootup_time().map(|boot_time| boot_time.to_string())
}
