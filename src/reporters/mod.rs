//! Output reporters for analysis results
//!
//! Supports three formats:
//! - `csv` - The two classic output tables (interconnections, community stats)
//! - `json` - Machine-readable JSON of the full report
//! - `text` - Terminal summary

mod csv;
mod json;
mod text;

pub use csv::{render_community_stats, render_interconnections};

use crate::models::OverlapReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: csv, json, text", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// A rendered report, ready to write
#[derive(Debug)]
pub enum RenderedReport {
    /// One document (json, text)
    Document(String),
    /// CSV splits into the two output tables
    Tables {
        interconnections: String,
        community_stats: String,
    },
}

/// Render a report in the given format
pub fn render(report: &OverlapReport, format: OutputFormat) -> Result<RenderedReport> {
    match format {
        OutputFormat::Csv => Ok(RenderedReport::Tables {
            interconnections: csv::render_interconnections(report),
            community_stats: csv::render_community_stats(report),
        }),
        OutputFormat::Json => Ok(RenderedReport::Document(json::render(report)?)),
        OutputFormat::Text => Ok(RenderedReport::Document(text::render(report))),
    }
}
