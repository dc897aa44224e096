//! JSON reporter
//!
//! Outputs the full OverlapReport as pretty-printed JSON. The ratio keeps
//! full precision here; machine consumers can round themselves.

use crate::models::OverlapReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &OverlapReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
