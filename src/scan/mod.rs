pub mod criteria;
pub mod scan_error;
pub mod scanner;

pub use criteria::MatchCriteria;
pub use scan_error::ScanError;
pub use scanner::{RecordIter, find_record};
