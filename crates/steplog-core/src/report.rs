//! Report — joins xUnit suite verdicts with normalised step records.
//!
//! This is the network-free half of result publishing: everything a tracker
//! upload needs, keyed by test case name, with step counts reconciled against
//! the number of steps the tracker's test plan lists for each case.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{StepRecord, SuiteVerdict, TestCaseRecord, Verdict};

/// Steps of one record after being lined up with an expected count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub steps: Vec<StepRecord>,
    /// `true` when the log had exactly the expected number of steps.
    pub consistent: bool,
}

/// Pad missing steps as failed silent steps, or fail the surplus ones.
pub fn reconcile(record: &TestCaseRecord, expected: usize, sentinel: &str) -> Reconciliation {
    let actual = record.steps.len();
    let mut steps = record.steps.clone();

    if actual < expected {
        steps.resize_with(expected, || StepRecord::silent(false, sentinel));
    } else {
        for step in steps.iter_mut().skip(expected) {
            step.passed = false;
        }
    }

    if actual != expected {
        warn!(case = %record.name, expected, actual, "step count mismatch");
    }

    Reconciliation {
        steps,
        consistent: actual == expected,
    }
}

/// One line of the assembled report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub verdict: Verdict,
    /// Empty when the log holds no record with this name.
    pub steps: Vec<StepRecord>,
}

/// Join `verdicts` with `records` by exact name, in verdict order.
///
/// When `expected` knows a step count for a name, the record's steps are
/// reconciled and a mismatch turns the verdict into [`Verdict::Failed`].
pub fn assemble(
    verdicts: &[SuiteVerdict],
    records: &[TestCaseRecord],
    expected: &HashMap<String, usize>,
    sentinel: &str,
) -> Vec<CaseReport> {
    let by_name: HashMap<&str, &TestCaseRecord> = records
        .iter()
        .rev()
        .map(|record| (record.name.as_str(), record))
        .collect();

    verdicts
        .iter()
        .map(|suite| {
            let mut verdict = suite.verdict;
            let steps = match (by_name.get(suite.name.as_str()), expected.get(&suite.name)) {
                (Some(record), Some(&count)) => {
                    let rec = reconcile(record, count, sentinel);
                    if !rec.consistent {
                        verdict = Verdict::Failed;
                    }
                    rec.steps
                }
                (Some(record), None) => record.steps.clone(),
                (None, _) => Vec::new(),
            };
            CaseReport {
                name: suite.name.clone(),
                verdict,
                steps,
            }
        })
        .collect()
}

/// Plain-text rendering used by `steplog normalize` without `--json`.
pub struct Summary<'a>(pub &'a [TestCaseRecord]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.0 {
            writeln!(f, "{} {}", record.verdict(), record.name)?;
            for (idx, step) in record.steps.iter().enumerate() {
                writeln!(f, "  step {}: {}", idx + 1, step.verdict())?;
                for line in &step.output_lines {
                    writeln!(f, "    {line}")?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
