use serde::{Deserialize, Serialize};

use super::tier::RiskTier;

/// Top-line recommendation, picked from the overall (RCP8.5) tier only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    ReviewInsuranceAndMitigation,
    StayVigilant,
    RoutineMonitoring,
}

impl Advisory {
    pub fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::High => Advisory::ReviewInsuranceAndMitigation,
            RiskTier::Medium => Advisory::StayVigilant,
            RiskTier::Low => Advisory::RoutineMonitoring,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Advisory::ReviewInsuranceAndMitigation => {
                "High risk. Review flood insurance and mitigation options, and stay informed about local flood warnings."
            }
            Advisory::StayVigilant => {
                "Medium risk. Monitor local flood advisories, especially during heavy rain or storm seasons."
            }
            Advisory::RoutineMonitoring => {
                "Low risk. Keep an eye on weather reports just in case."
            }
        }
    }
}
