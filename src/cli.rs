// src/cli.rs

use std::fmt::Write as _;

use crate::report::RiskReport;
use crate::risk::ChangeDirection;
use crate::service::{FloodRiskService, QueryError};

/// Process exit statuses for a single query.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const NOT_FOUND: u8 = 1;
    pub const MALFORMED: u8 = 2;
    /// The report could not be serialised.
    pub const INTERNAL: u8 = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the binary prints and the status it exits with for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub status: u8,
    pub stdout: String,
    pub stderr: String,
}

impl QueryOutput {
    fn ok(stdout: String) -> Self {
        QueryOutput {
            status: exit_codes::SUCCESS,
            stdout,
            stderr: String::new(),
        }
    }

    fn failed(status: u8, stderr: String) -> Self {
        QueryOutput {
            status,
            stdout: String::new(),
            stderr,
        }
    }
}

pub fn run_query(service: &FloodRiskService, code: &str, format: OutputFormat) -> QueryOutput {
    match service.report(code) {
        Ok(report) => match format {
            OutputFormat::Text => QueryOutput::ok(render_text(&report)),
            OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                Ok(json) => QueryOutput::ok(format!("{}\n", json)),
                Err(err) => {
                    log::error!("Failed to serialize report: {}", err);
                    QueryOutput::failed(
                        exit_codes::INTERNAL,
                        format!("Failed to serialize report: {}\n", err),
                    )
                }
            },
        },
        Err(err @ QueryError::NotFound { .. }) => QueryOutput::failed(
            exit_codes::NOT_FOUND,
            format!("{}. Please check the code and try again.\n", err),
        ),
        Err(err @ QueryError::MalformedInput { .. }) => QueryOutput::failed(
            exit_codes::MALFORMED,
            format!("{}. Please enter a valid six-digit postal code.\n", err),
        ),
    }
}

pub fn render_text(report: &RiskReport) -> String {
    let mut out = String::new();
    // fmt::Write on a String cannot fail
    let _ = writeln!(out, "Flood Risk Assessment for {}", report.postal_code);
    if !report.road_name.is_empty() {
        let _ = writeln!(out, "  {}", report.road_name);
    }
    let _ = writeln!(
        out,
        "  Location:          {:.5}, {:.5}",
        report.latitude, report.longitude
    );
    let _ = writeln!(
        out,
        "  Baseline depth:    {:.2}m ({} risk)",
        report.baseline.depth, report.baseline.assessment.tier
    );
    let _ = writeln!(
        out,
        "  RCP8.5 depth:      {:.2}m ({} risk)",
        report.projected.depth, report.projected.assessment.tier
    );
    let _ = writeln!(out, "  Overall risk:      {} (under RCP8.5)", report.overall.tier);

    let arrow = match report.change.direction {
        ChangeDirection::Increasing => "up",
        ChangeDirection::Decreasing => "down",
    };
    let _ = writeln!(
        out,
        "  Risk change:       {} {:.2}m",
        arrow,
        report.change.magnitude()
    );
    for indicator in [report.flood_prone, report.hotspot] {
        let _ = writeln!(
            out,
            "  {:<18} {}",
            format!("{}:", indicator.kind.label()),
            indicator.answer()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendation: {}", report.advisory.message());
    out
}
