use bytesize::ByteSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::error::{DatasetError, LoadErrorKind};

/// Per-step durations of one dataset load. Steps are measured separately,
/// so `read + aggregate <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTiming {
    pub read: Option<Duration>,
    pub aggregate: Option<Duration>,
    pub total: Duration,
}

/// Lap timer for the read and aggregate steps of a load.
#[derive(Debug)]
pub struct LoadTimer {
    started: Instant,
    last_lap: Instant,
    timing: LoadTiming,
}

impl LoadTimer {
    pub fn start() -> Self {
        let now = Instant::now();
        LoadTimer {
            started: now,
            last_lap: now,
            timing: LoadTiming::default(),
        }
    }

    pub fn read_done(&mut self) {
        self.timing.read = Some(self.lap());
    }

    pub fn aggregate_done(&mut self) {
        self.timing.aggregate = Some(self.lap());
    }

    fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let step = now.duration_since(self.last_lap);
        self.last_lap = now;
        step
    }

    pub fn finish(mut self) -> LoadTiming {
        self.timing.total = self.started.elapsed();
        self.timing
    }
}

/// Outcome of the one-time dataset load, kept alongside the index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadReport {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub file_size_bytes: Option<u64>,
    pub raw_rows: usize,
    pub locations: usize,
    pub read_ms: u32,
    pub aggregate_ms: u32,
    pub total_ms: u32,
    pub error_kind: Option<LoadErrorKind>,
    pub error: Option<String>,
}

fn clamp_ms(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

impl LoadReport {
    pub fn succeeded(
        source: &str,
        file_size_bytes: Option<u64>,
        raw_rows: usize,
        locations: usize,
        timing: &LoadTiming,
    ) -> Self {
        LoadReport {
            source: source.to_string(),
            loaded_at: Utc::now(),
            file_size_bytes,
            raw_rows,
            locations,
            read_ms: timing.read.map(clamp_ms).unwrap_or(0),
            aggregate_ms: timing.aggregate.map(clamp_ms).unwrap_or(0),
            total_ms: clamp_ms(timing.total),
            error_kind: None,
            error: None,
        }
    }

    pub fn failed(
        source: &str,
        file_size_bytes: Option<u64>,
        error: &DatasetError,
        timing: &LoadTiming,
    ) -> Self {
        LoadReport {
            source: source.to_string(),
            loaded_at: Utc::now(),
            file_size_bytes,
            raw_rows: 0,
            locations: 0,
            read_ms: timing.read.map(clamp_ms).unwrap_or(0),
            aggregate_ms: timing.aggregate.map(clamp_ms).unwrap_or(0),
            total_ms: clamp_ms(timing.total),
            error_kind: Some(error.kind()),
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn summary(&self) -> String {
        let size = self
            .file_size_bytes
            .map(|bytes| ByteSize::b(bytes).to_string())
            .unwrap_or_else(|| "n/a".to_string());
        match &self.error {
            None => format!(
                "{} ({}): {} rows -> {} locations in {}ms (read {}ms, aggregate {}ms)",
                self.source,
                size,
                self.raw_rows,
                self.locations,
                self.total_ms,
                self.read_ms,
                self.aggregate_ms
            ),
            Some(err) => format!("{} ({}): load failed: {}", self.source, size, err),
        }
    }
}
