//! JSONL activity record source
//!
//! One JSON object per line, deserialized into `ActivityRecord`. Blank
//! lines are skipped. Each line yields its own `Result` so the caller can
//! choose between log-and-skip and abort; a malformed line never hides the
//! lines after it.

use crate::models::ActivityRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading a JSONL source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// Streaming reader over a JSONL file of activity records
pub struct JsonlSource<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl JsonlSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlSource<R> {
    type Item = Result<ActivityRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(SourceError::Io(e))),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|source| {
                SourceError::Malformed {
                    line: self.line_no,
                    source,
                }
            }));
        }
    }
}
