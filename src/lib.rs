pub mod numeric;
pub mod interval;
pub mod bbox;
pub mod obj;
pub mod error;
pub mod config;
pub mod scanner;

pub mod prelude;

pub use bbox::BBox;
pub use config::ScanConfig;
pub use error::{ParseError, ScanError, UsageError};
pub use scanner::{ScanReport, bounds_of_file, scan_file, scan_reader};
