use serde::{Deserialize, Serialize};
use std::fmt;

/// Depths at or above this are at least Medium.
pub const MEDIUM_THRESHOLD: f64 = 0.5;
/// Depths strictly above this are High.
pub const HIGH_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Stable colour-coding key for the presentation layer. Not a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "severity-low")]
    Low,
    #[serde(rename = "severity-medium")]
    Medium,
    #[serde(rename = "severity-high")]
    High,
}

impl RiskTier {
    pub fn rank(self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Medium => 1,
            RiskTier::High => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            RiskTier::Low => Severity::Low,
            RiskTier::Medium => Severity::Medium,
            RiskTier::High => Severity::High,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Severity {
    pub fn token(self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub severity: Severity,
}

impl RiskAssessment {
    fn of(tier: RiskTier) -> Self {
        RiskAssessment {
            tier,
            severity: tier.severity(),
        }
    }
}

/// Map a depth in meters to a tier: `< 0.5` Low, `0.5..=1.0` Medium, `> 1.0` High.
///
/// Plain ordered comparisons, no clamping. Negative depths land in Low.
pub fn classify(depth: f64) -> RiskAssessment {
    if depth < MEDIUM_THRESHOLD {
        RiskAssessment::of(RiskTier::Low)
    } else if depth <= HIGH_THRESHOLD {
        RiskAssessment::of(RiskTier::Medium)
    } else {
        RiskAssessment::of(RiskTier::High)
    }
}
