use serde::{Deserialize, Serialize};

use crate::dataset::LocationRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    FloodProne,
    Hotspot,
}

impl IndicatorKind {
    pub fn label(self) -> &'static str {
        match self {
            IndicatorKind::FloodProne => "Flood-Prone Area",
            IndicatorKind::Hotspot => "Flood Hotspot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IndicatorKind::FloodProne => {
                "Low-lying location with a history of flooding, largely mitigated by drainage works."
            }
            IndicatorKind::Hotspot => {
                "Not low-lying, but flash floods have been observed; localised flooding needs attention."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaIndicator {
    pub kind: IndicatorKind,
    pub active: bool,
}

impl AreaIndicator {
    pub fn flood_prone(record: &LocationRecord) -> Self {
        AreaIndicator {
            kind: IndicatorKind::FloodProne,
            active: record.flood_prone,
        }
    }

    pub fn hotspot(record: &LocationRecord) -> Self {
        AreaIndicator {
            kind: IndicatorKind::Hotspot,
            active: record.hotspot,
        }
    }

    pub fn answer(&self) -> &'static str {
        if self.active {
            "Yes"
        } else {
            "No"
        }
    }
}
