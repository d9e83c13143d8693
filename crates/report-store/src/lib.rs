//! Persistence for curator-confirmed reports.
//!
//! A reviewed report goes to exactly one of two sinks: a write-once STIX
//! bundle for threat-intelligence exchange, or an appended row in the
//! tab-delimited retraining corpus. The router owns the mode decision
//! and record preparation; the sinks own durability.

pub mod corpus;
pub mod export;
pub mod router;

pub use corpus::FileCorpus;
pub use export::StixExporter;
pub use router::{prepare_export, prepare_training, route, SaveMode, SaveOutcome};
