use serde::{Deserialize, Serialize};

use crate::dataset::{LocationRecord, PostalCode};
use crate::risk::{classify, Advisory, AreaIndicator, DepthChange, RiskAssessment};

/// One scenario's depth together with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDepth {
    pub depth: f64,
    pub assessment: RiskAssessment,
}

impl ScenarioDepth {
    fn classify(depth: f64) -> Self {
        ScenarioDepth {
            depth,
            assessment: classify(depth),
        }
    }
}

/// Everything the presentation layer needs for one postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub postal_code: PostalCode,
    pub road_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub baseline: ScenarioDepth,
    pub projected: ScenarioDepth,
    /// Driven by the RCP8.5 depth, not the baseline.
    pub overall: RiskAssessment,
    pub change: DepthChange,
    pub flood_prone: AreaIndicator,
    pub hotspot: AreaIndicator,
    pub advisory: Advisory,
}

impl RiskReport {
    pub fn from_record(record: &LocationRecord) -> Self {
        let baseline = ScenarioDepth::classify(record.baseline_depth);
        let projected = ScenarioDepth::classify(record.projected_depth);
        let overall = projected.assessment;

        RiskReport {
            postal_code: record.postal_code.clone(),
            road_name: record.road_name.clone(),
            address: record.address.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            baseline,
            projected,
            overall,
            change: DepthChange::between(record.baseline_depth, record.projected_depth),
            flood_prone: AreaIndicator::flood_prone(record),
            hotspot: AreaIndicator::hotspot(record),
            advisory: Advisory::for_tier(overall.tier),
        }
    }
}
