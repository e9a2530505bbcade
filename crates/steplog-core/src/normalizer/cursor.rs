//! Case/step cursor shared by both log dialects.
//!
//! Each dialect scans its input and drives a [`CaseCursor`] with boundary
//! and line events. The cursor owns the finalize-on-boundary rules so both
//! dialects produce records under the same contract.

use tracing::{debug, trace};

use crate::types::{StepRecord, TestCaseRecord};

/// What to do with a step boundary that arrives while the open step is
/// still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyStepPolicy {
    /// Every boundary opens a step, even if the previous one saw nothing.
    /// Content before the first boundary of a case is held in an implicit
    /// step that survives only if no boundary follows.
    Keep,
    /// A boundary before any content re-triggers the open step.
    Collapse,
}

#[derive(Debug, Default)]
struct StepBuilder {
    failed: bool,
    lines: Vec<String>,
    /// Opened by content rather than by a boundary.
    implicit: bool,
}

impl StepBuilder {
    fn has_content(&self) -> bool {
        self.failed || !self.lines.is_empty()
    }

    fn finish(self, sentinel: &str) -> StepRecord {
        if self.lines.is_empty() {
            return StepRecord::silent(!self.failed, sentinel);
        }
        StepRecord {
            passed: !self.failed,
            output_lines: self.lines,
        }
    }
}

#[derive(Debug)]
struct CaseBuilder {
    name: String,
    steps: Vec<StepRecord>,
}

pub(crate) struct CaseCursor<'a> {
    sentinel: &'a str,
    policy: EmptyStepPolicy,
    records: Vec<TestCaseRecord>,
    case: Option<CaseBuilder>,
    step: Option<StepBuilder>,
}

impl<'a> CaseCursor<'a> {
    pub(crate) fn new(sentinel: &'a str, policy: EmptyStepPolicy) -> Self {
        Self {
            sentinel,
            policy,
            records: Vec::new(),
            case: None,
            step: None,
        }
    }

    /// Close whatever is open and start a case named `name`.
    pub(crate) fn open_case(&mut self, name: impl Into<String>) {
        self.close_case();
        let name = name.into();
        debug!(case = %name, "case opened");
        self.case = Some(CaseBuilder {
            name,
            steps: Vec::new(),
        });
    }

    /// Start a new step in the current case. Ignored outside a case.
    pub(crate) fn open_step(&mut self) {
        if self.case.is_none() {
            trace!("step boundary outside any case; ignored");
            return;
        }
        if let Some(step) = &self.step {
            if self.policy == EmptyStepPolicy::Collapse && !step.has_content() {
                trace!("step boundary re-triggered before any content");
                return;
            }
        }
        let mut next = StepBuilder::default();
        if self.step.as_ref().is_some_and(|step| step.implicit) {
            if let Some(step) = self.step.take() {
                trace!(lines = step.lines.len(), "lines before first step boundary dropped");
                next.failed = step.failed;
            }
        }
        self.close_step();
        self.step = Some(next);
    }

    /// Append a captured line to the open step.
    pub(crate) fn capture(&mut self, line: impl Into<String>) {
        let line: String = line.into();
        match self.current_step() {
            Some(step) => step.lines.push(line),
            None => trace!(%line, "line outside any step; dropped"),
        }
    }

    /// Flag the open step as failed. The flag is never cleared, and a
    /// failure ahead of the first boundary carries into the first step.
    pub(crate) fn mark_failed(&mut self) {
        match self.current_step() {
            Some(step) => step.failed = true,
            None => trace!("failure outside any step; dropped"),
        }
    }

    fn current_step(&mut self) -> Option<&mut StepBuilder> {
        if self.step.is_none() && self.case.is_some() && self.policy == EmptyStepPolicy::Keep {
            self.step = Some(StepBuilder {
                implicit: true,
                ..StepBuilder::default()
            });
        }
        self.step.as_mut()
    }

    pub(crate) fn has_open_case(&self) -> bool {
        self.case.is_some()
    }

    /// Close everything still open and hand back the records.
    pub(crate) fn finish(mut self) -> Vec<TestCaseRecord> {
        self.close_case();
        self.records
    }

    fn close_step(&mut self) {
        let Some(step) = self.step.take() else {
            return;
        };
        if let Some(case) = &mut self.case {
            case.steps.push(step.finish(self.sentinel));
        }
    }

    fn close_case(&mut self) {
        self.close_step();
        if let Some(case) = self.case.take() {
            debug!(case = %case.name, steps = case.steps.len(), "case closed");
            self.records.push(TestCaseRecord {
                name: case.name,
                steps: case.steps,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
