//! Input sources for normalized activity records
//!
//! The remote fetch client lives upstream; by the time data reaches this
//! crate it is a stream of normalized records. JSONL is the handoff format.

mod jsonl;

pub use jsonl::{JsonlSource, SourceError};
