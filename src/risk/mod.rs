mod advisory;
mod change;
mod indicators;
mod tier;

#[cfg(test)]
mod tests;

pub use advisory::Advisory;
pub use change::{ChangeDirection, DepthChange};
pub use indicators::{AreaIndicator, IndicatorKind};
pub use tier::{classify, RiskAssessment, RiskTier, Severity, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
