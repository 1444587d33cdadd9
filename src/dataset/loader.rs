// src/dataset/loader.rs

use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::DatasetError;
use super::postal::PostalCode;
use super::types::RawRecord;

pub const COL_POSTAL: &str = "POSTAL";
pub const COL_LATITUDE: &str = "LATITUDE";
pub const COL_LONGITUDE: &str = "LONGITUDE";
pub const COL_ROAD_NAME: &str = "ROAD_NAME";
pub const COL_ADDRESS: &str = "ADDRESS";
pub const COL_BASELINE: &str = "Flood_DEPTH_BASELINE";
pub const COL_PROJECTED: &str = "Flood_DEPTH_RCP";
pub const COL_FLOOD_PRONE: &str = "Flood_PRONE";
pub const COL_HOTSPOT: &str = "HOTSPOT";

pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_POSTAL,
    COL_LATITUDE,
    COL_LONGITUDE,
    COL_ROAD_NAME,
    COL_ADDRESS,
    COL_BASELINE,
    COL_PROJECTED,
    COL_FLOOD_PRONE,
    COL_HOTSPOT,
];

/// Read the dataset file. `.gz` files are decompressed, anything else is read as plain CSV.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let records = if is_gzip(path) {
        debug!("Reading gzip dataset {}", path.display());
        read_raw_records(GzDecoder::new(BufReader::new(file)))?
    } else {
        debug!("Reading plain CSV dataset {}", path.display());
        read_raw_records(BufReader::new(file))?
    };

    info!("Read {} raw rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV from any reader. The whole input is rejected on the first bad row.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(DatasetError::Empty);
    }
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        records.push(columns.parse_row(&row, line)?);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(records)
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    postal: usize,
    latitude: usize,
    longitude: usize,
    road_name: usize,
    address: usize,
    baseline: usize,
    projected: usize,
    flood_prone: usize,
    hotspot: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let names: Vec<String> = headers
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();

        let mut missing = Vec::new();
        let mut find = |column: &str| -> usize {
            let wanted = column.to_lowercase();
            match names.iter().position(|name| *name == wanted) {
                Some(idx) => idx,
                None => {
                    missing.push(column.to_string());
                    usize::MAX
                }
            }
        };

        let map = ColumnMap {
            postal: find(COL_POSTAL),
            latitude: find(COL_LATITUDE),
            longitude: find(COL_LONGITUDE),
            road_name: find(COL_ROAD_NAME),
            address: find(COL_ADDRESS),
            baseline: find(COL_BASELINE),
            projected: find(COL_PROJECTED),
            flood_prone: find(COL_FLOOD_PRONE),
            hotspot: find(COL_HOTSPOT),
        };

        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns { missing });
        }
        Ok(map)
    }

    fn parse_row(&self, row: &csv::StringRecord, line: u64) -> Result<RawRecord, DatasetError> {
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let postal_code =
            PostalCode::normalize(cell(self.postal)).map_err(|err| DatasetError::InvalidRow {
                line,
                column: COL_POSTAL.to_string(),
                reason: err.to_string(),
            })?;

        Ok(RawRecord {
            postal_code,
            latitude: parse_coordinate(cell(self.latitude), COL_LATITUDE, line)?,
            longitude: parse_coordinate(cell(self.longitude), COL_LONGITUDE, line)?,
            road_name: cell(self.road_name).to_string(),
            address: cell(self.address).to_string(),
            baseline_depth: parse_depth(cell(self.baseline), COL_BASELINE, line)?,
            projected_depth: parse_depth(cell(self.projected), COL_PROJECTED, line)?,
            flood_prone: parse_flag(cell(self.flood_prone), COL_FLOOD_PRONE, line)?,
            hotspot: parse_flag(cell(self.hotspot), COL_HOTSPOT, line)?,
        })
    }
}

fn invalid(line: u64, column: &str, reason: impl Into<String>) -> DatasetError {
    DatasetError::InvalidRow {
        line,
        column: column.to_string(),
        reason: reason.into(),
    }
}

fn parse_real(value: &str, column: &str, line: u64) -> Result<f64, DatasetError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| invalid(line, column, format!("'{}' is not a number", value)))?;
    if !parsed.is_finite() {
        return Err(invalid(line, column, format!("'{}' is not finite", value)));
    }
    Ok(parsed)
}

fn parse_coordinate(value: &str, column: &str, line: u64) -> Result<f64, DatasetError> {
    parse_real(value, column, line)
}

fn parse_depth(value: &str, column: &str, line: u64) -> Result<f64, DatasetError> {
    let depth = parse_real(value, column, line)?;
    if depth < 0.0 {
        return Err(invalid(line, column, format!("negative depth {}", value)));
    }
    Ok(depth)
}

/// Flags are stored as 0/1. `1.0`-style exports are accepted, nothing else is.
fn parse_flag(value: &str, column: &str, line: u64) -> Result<bool, DatasetError> {
    match value.parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(false),
        Ok(v) if v == 1.0 => Ok(true),
        _ => Err(invalid(
            line,
            column,
            format!("flag must be 0 or 1, got '{}'", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "POSTAL,LATITUDE,LONGITUDE,ROAD_NAME,ADDRESS,Flood_DEPTH_BASELINE,Flood_DEPTH_RCP,Flood_PRONE,HOTSPOT\n";

    #[test]
    fn parses_rows_and_pads_codes() {
        let csv = format!(
            "{HEADER}18956,1.2966,103.8520,Stamford Road,\"1 Stamford Rd, Singapore\",0.40,0.90,0,1\n"
        );
        let records = read_raw_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.postal_code.as_str(), "018956");
        assert_eq!(record.address, "1 Stamford Rd, Singapore");
        assert!(!record.flood_prone);
        assert!(record.hotspot);
        assert!((record.projected_depth - 0.90).abs() < 1e-9);
    }

    #[test]
    fn header_match_ignores_case_order_and_extras() {
        let csv = "hotspot,flood_prone,EXTRA,flood_depth_rcp,flood_depth_baseline,address,road_name,longitude,latitude,postal\n\
                   1.0,0.0,x,1.2,0.3,Addr,Road,103.9,1.3,123456\n";
        let records = read_raw_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].postal_code.as_str(), "123456");
        assert!(records[0].hotspot);
        assert!(!records[0].flood_prone);
        assert!((records[0].baseline_depth - 0.3).abs() < 1e-9);
    }

    #[test]
    fn reports_every_missing_column() {
        let csv = "POSTAL,LATITUDE,LONGITUDE,ROAD_NAME,ADDRESS,Flood_DEPTH_BASELINE,Flood_PRONE\n1,1,1,a,b,0.1,0\n";
        match read_raw_records(csv.as_bytes()) {
            Err(DatasetError::MissingColumns { missing }) => {
                assert_eq!(missing, vec![COL_PROJECTED.to_string(), COL_HOTSPOT.to_string()]);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn rejects_flag_outside_zero_one() {
        let csv = format!("{HEADER}018956,1.3,103.8,R,A,0.4,0.9,2,0\n");
        match read_raw_records(csv.as_bytes()) {
            Err(DatasetError::InvalidRow { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, COL_FLOOD_PRONE);
            }
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_depths() {
        for bad in ["abc", "", "-0.2", "NaN", "inf"] {
            let csv = format!("{HEADER}018956,1.3,103.8,R,A,{bad},0.9,0,0\n");
            assert!(
                matches!(
                    read_raw_records(csv.as_bytes()),
                    Err(DatasetError::InvalidRow { .. })
                ),
                "depth '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn one_bad_row_rejects_everything() {
        let csv = format!(
            "{HEADER}018956,1.3,103.8,R,A,0.4,0.9,0,0\n01895x,1.3,103.8,R,A,0.4,0.9,0,0\n"
        );
        assert!(read_raw_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_inputs_are_reported_as_empty() {
        assert!(matches!(read_raw_records(&b""[..]), Err(DatasetError::Empty)));
        assert!(matches!(
            read_raw_records(HEADER.as_bytes()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn ragged_rows_are_csv_errors() {
        let csv = format!("{HEADER}018956,1.3,103.8\n");
        assert!(matches!(read_raw_records(csv.as_bytes()), Err(DatasetError::Csv(_))));
    }
}
