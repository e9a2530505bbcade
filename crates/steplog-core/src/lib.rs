//! steplog-core — test-log normalisation core.
//!
//! This crate turns Robot Framework and Ceedling logs into per-step result
//! records, reads xUnit suite verdicts, and joins the two into a report.
//!
//! # Architecture
//!
//! ```text
//! log bytes ──► Normalizer ──► TestCaseRecord ─┐
//!                                              ├──► report::assemble ──► CaseReport
//! xUnit bytes ──► xunit::parse_verdicts ───────┘
//! ```
//!
//! Everything here is synchronous and free of I/O; reading the bytes is the
//! job of `steplog-sources`.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod report;
pub mod types;
pub mod xunit;

mod xml;

pub use error::NormalizeError;
pub use normalizer::{normalize, Normalizer};
pub use types::{LogFormat, StepRecord, SuiteVerdict, TestCaseRecord, Verdict, NO_OUTPUT};
