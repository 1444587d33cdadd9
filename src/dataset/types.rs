use serde::{Deserialize, Serialize};

use super::postal::PostalCode;

/// One validated row of the input table. Several rows may share a postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub postal_code: PostalCode,
    pub latitude: f64,
    pub longitude: f64,
    pub road_name: String,
    pub address: String,
    pub baseline_depth: f64,  // meters, present-day scenario
    pub projected_depth: f64, // meters, RCP8.5 scenario
    pub flood_prone: bool,
    pub hotspot: bool,
}

/// Canonical per-postal-code record produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub postal_code: PostalCode,
    pub latitude: f64,
    pub longitude: f64,
    pub road_name: String,
    pub address: String,
    pub baseline_depth: f64,
    pub projected_depth: f64,
    pub flood_prone: bool,
    pub hotspot: bool,
    pub source_rows: usize,
}

impl LocationRecord {
    /// Signed change from baseline to RCP8.5 depth; positive means rising risk.
    pub fn depth_delta(&self) -> f64 {
        self.projected_depth - self.baseline_depth
    }
}
