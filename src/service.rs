// src/service.rs

use log::{debug, error, info};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::DATASET_CONFIG;
use crate::dataset::telemetry::LoadTimer;
use crate::dataset::{
    aggregate, load_raw_records, DatasetError, LoadReport, LocationIndex, LocationRecord,
    PostalCode, RawRecord,
};
use crate::report::RiskReport;

/// Per-query failures. Always returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("'{input}' is not a valid six-digit postal code")]
    MalformedInput { input: String },
    #[error("postal code {code} not found in dataset")]
    NotFound { code: PostalCode },
}

/// Lookup facade over an index that is frozen at construction.
#[derive(Debug, Clone)]
pub struct FloodRiskService {
    index: LocationIndex,
    load_report: Option<LoadReport>,
}

static SHARED_SERVICE: OnceCell<FloodRiskService> = OnceCell::new();

/// Build the shared service from `path` unless it already exists.
/// Later calls return the first instance regardless of `path`.
pub fn init_shared_service(path: &Path) -> &'static FloodRiskService {
    SHARED_SERVICE.get_or_init(|| FloodRiskService::load(path))
}

/// Shared service, loaded from the configured dataset on first use.
pub fn shared_service() -> &'static FloodRiskService {
    SHARED_SERVICE.get_or_init(|| FloodRiskService::load(&DATASET_CONFIG.dataset_path))
}

impl FloodRiskService {
    pub fn from_index(index: LocationIndex) -> Self {
        FloodRiskService {
            index,
            load_report: None,
        }
    }

    /// Aggregate in-memory rows. Empty input gives an empty service.
    pub fn from_records(raw: &[RawRecord]) -> Self {
        match aggregate(raw) {
            Ok(index) => Self::from_index(index),
            Err(err) => {
                error!("Aggregation failed, serving no data: {}", err);
                Self::from_index(LocationIndex::empty())
            }
        }
    }

    /// Load and aggregate the dataset at `path`. Never fails: errors are
    /// logged, kept in the load report, and leave the index empty.
    pub fn load(path: &Path) -> Self {
        let source = path.display().to_string();
        let file_size = fs::metadata(path).ok().map(|meta| meta.len());
        let mut timer = LoadTimer::start();

        let outcome = load_raw_records(path).and_then(|raw| {
            timer.read_done();
            let index = aggregate(&raw)?;
            timer.aggregate_done();
            Ok((raw.len(), index))
        });
        let timing = timer.finish();

        match outcome {
            Ok((raw_rows, index)) => {
                let report =
                    LoadReport::succeeded(&source, file_size, raw_rows, index.len(), &timing);
                info!("Dataset loaded: {}", report.summary());
                FloodRiskService {
                    index,
                    load_report: Some(report),
                }
            }
            Err(err) => {
                let report = LoadReport::failed(&source, file_size, &err, &timing);
                error!("{:?}: {}", err.kind(), report.summary());
                FloodRiskService {
                    index: LocationIndex::empty(),
                    load_report: Some(report),
                }
            }
        }
    }

    /// Like [`FloodRiskService::load`] but hands the load error back instead of recovering.
    pub fn try_load(path: &Path) -> Result<Self, DatasetError> {
        let raw = load_raw_records(path)?;
        Ok(Self::from_index(aggregate(&raw)?))
    }

    pub fn lookup(&self, code: &str) -> Result<&LocationRecord, QueryError> {
        let code = PostalCode::parse_query(code).map_err(|err| {
            debug!("Rejected query: {}", err);
            QueryError::MalformedInput {
                input: code.to_string(),
            }
        })?;
        match self.index.get(&code) {
            Some(record) => Ok(record),
            None => {
                debug!("No location for {}", code);
                Err(QueryError::NotFound { code })
            }
        }
    }

    pub fn report(&self, code: &str) -> Result<RiskReport, QueryError> {
        self.lookup(code).map(RiskReport::from_record)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn load_report(&self) -> Option<&LoadReport> {
        self.load_report.as_ref()
    }
}
