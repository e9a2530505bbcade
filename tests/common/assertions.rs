//! Domain-specific assertion macros for steplog harnesses.
//!
//! These wrap `pretty_assertions` and name the record and step that broke,
//! so a failing harness points straight at the offending step.

// ---------------------------------------------------------------------------
// Step assertions
// ---------------------------------------------------------------------------

/// Assert a step's verdict and captured lines.
///
/// ```rust
/// assert_step!(records[0], 1, passed = false, lines = ["assert mismatch"]);
/// ```
#[macro_export]
macro_rules! assert_step {
    ($record:expr, $idx:expr, passed = $passed:expr, lines = [$($line:expr),* $(,)?]) => {{
        let record: &steplog_core::TestCaseRecord = &$record;
        let idx: usize = $idx;
        let step = record.steps.get(idx).unwrap_or_else(|| {
            panic!(
                "assert_step! failed: {:?} has {} step(s), wanted index {}",
                record.name,
                record.steps.len(),
                idx
            )
        });
        let expected: Vec<String> = vec![$($line.to_string()),*];
        assert_eq!(
            step.passed, $passed,
            "assert_step! failed: verdict of {:?} step {}",
            record.name, idx
        );
        pretty_assertions::assert_eq!(
            step.output_lines, expected,
            "assert_step! failed: lines of {:?} step {}",
            record.name, idx
        );
    }};
}

/// Assert a step captured nothing and therefore carries the sentinel.
#[macro_export]
macro_rules! assert_silent {
    ($record:expr, $idx:expr) => {{
        let record: &steplog_core::TestCaseRecord = &$record;
        let step = &record.steps[$idx];
        pretty_assertions::assert_eq!(
            step.output_lines,
            vec![steplog_core::NO_OUTPUT.to_string()],
            "assert_silent! failed: {:?} step {} captured output",
            record.name,
            $idx
        );
    }};
}

// ---------------------------------------------------------------------------
// Record-level assertions
// ---------------------------------------------------------------------------

/// Assert that no step anywhere has an empty `output_lines`.
#[macro_export]
macro_rules! assert_no_empty_steps {
    ($records:expr) => {{
        for record in $records.iter() {
            for (idx, step) in record.steps.iter().enumerate() {
                assert!(
                    !step.output_lines.is_empty(),
                    "assert_no_empty_steps! failed: {:?} step {} has no lines",
                    record.name,
                    idx
                );
            }
        }
    }};
}
