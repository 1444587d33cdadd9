// src/dataset/aggregate.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::DatasetError;
use super::postal::PostalCode;
use super::types::{LocationRecord, RawRecord};

const DEPTH_SCALE: f64 = 100.0; // two decimal places

/// Round half away from zero to two decimals. Used for both depth fields.
pub fn round_depth(value: f64) -> f64 {
    (value * DEPTH_SCALE).round() / DEPTH_SCALE
}

/// Read-only mapping from postal code to its canonical record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationIndex {
    records: HashMap<PostalCode, LocationRecord>,
}

impl LocationIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &PostalCode) -> Option<&LocationRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &PostalCode) -> bool {
        self.records.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &LocationRecord> {
        self.records.values()
    }
}

#[derive(Debug)]
struct Accumulator<'a> {
    first: &'a RawRecord,
    road_name: &'a str,
    address: &'a str,
    baseline_sum: f64,
    projected_sum: f64,
    rows: usize,
    flood_prone: bool,
    hotspot: bool,
}

impl<'a> Accumulator<'a> {
    fn new(first: &'a RawRecord) -> Self {
        Accumulator {
            first,
            road_name: "",
            address: "",
            baseline_sum: 0.0,
            projected_sum: 0.0,
            rows: 0,
            flood_prone: false,
            hotspot: false,
        }
    }

    fn push(&mut self, record: &'a RawRecord) {
        // blank text cells are skipped; the first non-empty value wins
        if self.road_name.is_empty() {
            self.road_name = &record.road_name;
        }
        if self.address.is_empty() {
            self.address = &record.address;
        }
        self.baseline_sum += record.baseline_depth;
        self.projected_sum += record.projected_depth;
        self.rows += 1;
        self.flood_prone |= record.flood_prone;
        self.hotspot |= record.hotspot;
    }

    fn finish(self) -> LocationRecord {
        let rows = self.rows as f64;
        LocationRecord {
            postal_code: self.first.postal_code.clone(),
            latitude: self.first.latitude,
            longitude: self.first.longitude,
            road_name: self.road_name.to_string(),
            address: self.address.to_string(),
            baseline_depth: round_depth(self.baseline_sum / rows),
            projected_depth: round_depth(self.projected_sum / rows),
            flood_prone: self.flood_prone,
            hotspot: self.hotspot,
            source_rows: self.rows,
        }
    }
}

/// Fold raw rows into one record per postal code.
///
/// Coordinates come from the first row seen for a code and road name and
/// address from the first row where they are non-empty. Depths are averaged
/// then rounded, and flags are OR-ed.
pub fn aggregate(raw: &[RawRecord]) -> Result<LocationIndex, DatasetError> {
    if raw.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut groups: HashMap<&PostalCode, Accumulator<'_>> = HashMap::new();
    for record in raw {
        groups
            .entry(&record.postal_code)
            .or_insert_with(|| Accumulator::new(record))
            .push(record);
    }

    let records = groups
        .into_values()
        .map(Accumulator::finish)
        .map(|record| (record.postal_code.clone(), record))
        .collect();

    Ok(LocationIndex { records })
}
