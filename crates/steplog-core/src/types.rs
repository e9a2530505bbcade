//! Core types for steplog-core.
//!
//! This module defines the records shared across the workspace: the
//! normalised [`TestCaseRecord`] and its [`StepRecord`]s, the xUnit
//! [`SuiteVerdict`], and the [`LogFormat`] discriminant.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Placeholder written into a step that captured no output.
pub const NO_OUTPUT: &str = "---";

/// One test case recovered from a log, with its steps in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    pub name: String,
    pub steps: Vec<StepRecord>,
}

impl TestCaseRecord {
    /// `true` when every step passed (vacuously true with no steps).
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|step| step.passed)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_passed(self.passed())
    }
}

/// Outcome of a single logical step within a test case.
///
/// `output_lines` is never empty: a step that captured nothing holds the
/// configured no-output sentinel as its only line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub passed: bool,
    pub output_lines: Vec<String>,
}

impl StepRecord {
    /// A step carrying only the sentinel line.
    pub fn silent(passed: bool, sentinel: &str) -> Self {
        Self {
            passed,
            output_lines: vec![sentinel.to_string()],
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_passed(self.passed)
    }
}

/// Pass/fail verdict as the tracker spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed => write!(f, "PASSED"),
            Verdict::Failed => write!(f, "FAILED"),
        }
    }
}

/// Verdict of one `<testsuite>` in an xUnit result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteVerdict {
    pub name: String,
    pub verdict: Verdict,
}

/// Which log dialect a byte stream is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Robot Framework `output.xml`: nested suites, tests, keywords, messages.
    Robot,
    /// Ceedling plain-text output with `:`-delimited assertion lines.
    Ceedling,
}

impl LogFormat {
    /// Pick the format from a file extension (`.xml` or `.txt`).
    pub fn detect(path: &Path) -> Result<Self, NormalizeError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("xml") => Ok(LogFormat::Robot),
            Some("txt") => Ok(LogFormat::Ceedling),
            _ => Err(NormalizeError::UnrecognizedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl FromStr for LogFormat {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "robot" | "xml" | "structured" => Ok(LogFormat::Robot),
            "ceedling" | "txt" | "text" | "plain" => Ok(LogFormat::Ceedling),
            _ => Err(NormalizeError::UnrecognizedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Robot => write!(f, "robot"),
            LogFormat::Ceedling => write!(f, "ceedling"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
