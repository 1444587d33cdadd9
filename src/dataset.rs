mod aggregate;
mod error;
mod loader;
mod postal;
pub mod telemetry;
pub mod types;


pub use aggregate::{aggregate, round_depth, LocationIndex};
pub use error::{DatasetError, LoadErrorKind};
pub use loader::{load_raw_records, read_raw_records, REQUIRED_COLUMNS};
pub use postal::{PostalCode, PostalCodeError};
pub use telemetry::{LoadReport, LoadTimer, LoadTiming};
pub use types::{LocationRecord, RawRecord};
