// src/config.rs

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DATASET_ENV_VAR: &str = "FLOOD_RISK_DATASET";
pub const DEFAULT_DATASET_FILE: &str = "flood_risk_data.csv.gz";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub dataset_path: PathBuf, // Default: $FLOOD_RISK_DATASET or flood_risk_data.csv.gz
}

impl DatasetConfig {
    /// Resolve the dataset path: explicit value, then the environment, then the default file.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let dataset_path = explicit
            .or_else(dataset_path_from_env)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE));
        DatasetConfig { dataset_path }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig::resolve(None)
    }
}

fn dataset_path_from_env() -> Option<PathBuf> {
    env::var(DATASET_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

// Global configuration
lazy_static! {
    pub static ref DATASET_CONFIG: DatasetConfig = DatasetConfig::default();
}
