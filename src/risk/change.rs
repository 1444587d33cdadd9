use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Increasing,
    Decreasing,
}

/// Baseline to RCP8.5 movement. A zero delta reads as `Increasing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthChange {
    pub delta: f64,
    pub direction: ChangeDirection,
}

impl DepthChange {
    pub fn between(baseline: f64, projected: f64) -> Self {
        let delta = projected - baseline;
        let direction = if delta < 0.0 {
            ChangeDirection::Decreasing
        } else {
            ChangeDirection::Increasing
        };
        DepthChange { delta, direction }
    }

    pub fn magnitude(&self) -> f64 {
        self.delta.abs()
    }
}
