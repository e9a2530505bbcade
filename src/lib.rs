//! steplog — test-log step normaliser.
//!
//! Re-exports the workspace crates so integration tests and benches can
//! import everything from one place, and hosts the CLI plumbing used by the
//! `steplog` binary.
//!
//! # Architecture
//!
//! ```text
//! sources ──► core::Normalizer ──► core::report ──► stdout (JSON / summary)
//! ```

pub mod cli;

pub use steplog_core::*;
pub use steplog_sources as sources;
