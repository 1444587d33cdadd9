pub mod cli;
pub mod config;
pub mod dataset;
mod report;
pub mod risk;
mod service;

pub use dataset::{
    aggregate, load_raw_records, read_raw_records, DatasetError, LoadErrorKind, LoadReport,
    LocationIndex, LocationRecord, PostalCode, RawRecord,
};
pub use report::{RiskReport, ScenarioDepth};
pub use risk::{classify, Advisory, RiskAssessment, RiskTier, Severity};
pub use service::{init_shared_service, shared_service, FloodRiskService, QueryError};
