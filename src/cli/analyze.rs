//! `crosstalk analyze` - ingest, analyze, and write the report

use crate::analysis;
use crate::config::{load_config, ProjectConfig};
use crate::ingest::{IngestStats, Ingestor};
use crate::reporters::{self, OutputFormat, RenderedReport};
use crate::session::Session;
use crate::source::{JsonlSource, SourceError};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

pub fn run(
    input: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    strict: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let input_dir = input.parent().unwrap_or(Path::new("."));
    let config = load_config(config_path, input_dir)?;

    let format = OutputFormat::from_str(format.unwrap_or(&config.default_format))?;

    let mut session = Session::new();
    let stats = ingest(input, &config, strict, &mut session)?;
    info!("Ingested {}", stats.summary());

    let report = analysis::analyze(&session);

    match reporters::render(&report, format)? {
        RenderedReport::Tables {
            interconnections,
            community_stats,
        } => {
            let out_dir = output.unwrap_or(input_dir);
            std::fs::create_dir_all(out_dir)
                .with_context(|| format!("creating output directory {}", out_dir.display()))?;
            let pairs_path = out_dir.join(format!("{}_interconnections.csv", config.output_prefix));
            let stats_path = out_dir.join(format!("{}_community_stats.csv", config.output_prefix));
            std::fs::write(&pairs_path, interconnections)
                .with_context(|| format!("writing {}", pairs_path.display()))?;
            std::fs::write(&stats_path, community_stats)
                .with_context(|| format!("writing {}", stats_path.display()))?;
            println!("Wrote {}", pairs_path.display());
            println!("Wrote {}", stats_path.display());
        }
        RenderedReport::Document(doc) => match output {
            Some(path) => {
                std::fs::write(path, doc)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{doc}"),
        },
    }
    Ok(())
}

/// Ingest every record from the input file into the session.
///
/// Malformed lines and invalid observations are logged and skipped unless
/// `strict` is set, in which case the first one aborts the run.
pub(crate) fn ingest(
    input: &Path,
    config: &ProjectConfig,
    strict: bool,
    session: &mut Session,
) -> Result<IngestStats> {
    let ingestor = Ingestor::with_sentinels(config.sentinel_users.clone());
    let source = JsonlSource::open(input)
        .with_context(|| format!("opening {}", input.display()))?;

    let mut stats = IngestStats::default();
    for item in source {
        match item {
            Ok(record) => {
                if let Err(e) = ingestor.ingest_record(session, &record, &mut stats) {
                    if strict {
                        bail!("{e}");
                    }
                    warn!("Skipping record: {e}");
                }
            }
            // IO failures abort regardless of strictness
            Err(e @ SourceError::Io(_)) => return Err(e.into()),
            Err(e) => {
                if strict {
                    bail!("{e}");
                }
                stats.malformed += 1;
                warn!("Skipping line: {e}");
            }
        }
    }
    Ok(stats)
}
