//! Crosstalk - cross-community overlap analysis
//!
//! Collects normalized post/comment activity records into an in-memory
//! session (bidirectional membership index + per-user interaction ledger)
//! and derives which users bridge communities, how strongly community
//! pairs are connected, and per-community interconnection statistics.
//!
//! Typical flow:
//!
//! ```
//! use crosstalk::analysis;
//! use crosstalk::ingest::Ingestor;
//! use crosstalk::models::ActivityRole;
//! use crosstalk::session::Session;
//!
//! let ingestor = Ingestor::new();
//! let mut session = Session::new();
//! ingestor.record_activity(&mut session, "u1", "alpha", ActivityRole::PostAuthor)?;
//! ingestor.record_activity(&mut session, "u1", "beta", ActivityRole::Commenter)?;
//!
//! let report = analysis::analyze(&session);
//! assert_eq!(report.connections.len(), 1);
//! # Ok::<(), crosstalk::ingest::IngestError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod models;
pub mod reporters;
pub mod session;
pub mod source;
