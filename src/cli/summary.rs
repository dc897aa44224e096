//! `crosstalk summary` - terminal summary of an activity file

use crate::analysis;
use crate::cli::analyze;
use crate::config::load_config;
use crate::reporters::{self, OutputFormat, RenderedReport};
use crate::session::Session;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(input: &Path, config_path: Option<&Path>) -> Result<()> {
    let input_dir = input.parent().unwrap_or(Path::new("."));
    let config = load_config(config_path, input_dir)?;

    let mut session = Session::new();
    let stats = analyze::ingest(input, &config, false, &mut session)?;
    info!("Ingested {}", stats.summary());

    let report = analysis::analyze(&session);
    if let RenderedReport::Document(doc) = reporters::render(&report, OutputFormat::Text)? {
        print!("{doc}");
    }
    Ok(())
}
