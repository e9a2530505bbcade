//! xUnit / JUnit result reader.
//!
//! Produces one [`SuiteVerdict`] per `<testsuite>` in document order. A
//! suite fails when one of its own test cases carries `<failure>` or
//! `<error>`, or when its `failures`/`errors` counters are positive.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::NormalizeError;
use crate::types::{SuiteVerdict, Verdict};
use crate::xml::attribute;

enum Node {
    /// Index into the verdict list.
    Suite(usize),
    Case,
    Other,
}

pub fn parse_verdicts(input: &[u8]) -> Result<Vec<SuiteVerdict>, NormalizeError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Node> = Vec::new();
    let mut verdicts: Vec<SuiteVerdict> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Err(err) => {
                return Err(malformed(format!(
                    "at byte {}: {err}",
                    reader.buffer_position()
                )));
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                let node = enter(&e, &stack, &mut verdicts)?;
                stack.push(node);
            }
            Ok(Event::Empty(e)) => {
                enter(&e, &stack, &mut verdicts)?;
            }
            Ok(Event::End(_)) => {
                stack
                    .pop()
                    .ok_or_else(|| malformed("closing tag without an open element"))?;
            }
            Ok(_) => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(malformed(format!(
            "document ended with {} unclosed element(s)",
            stack.len()
        )));
    }

    debug!(suites = verdicts.len(), "xunit verdicts parsed");
    Ok(verdicts)
}

fn enter(
    e: &BytesStart<'_>,
    stack: &[Node],
    verdicts: &mut Vec<SuiteVerdict>,
) -> Result<Node, NormalizeError> {
    let node = match e.local_name().as_ref() {
        b"testsuite" => {
            let name = attribute(e, "name").map_err(malformed)?.unwrap_or_default();
            let failed = positive_counter(e, "failures")? || positive_counter(e, "errors")?;
            verdicts.push(SuiteVerdict {
                name,
                verdict: Verdict::from_passed(!failed),
            });
            Node::Suite(verdicts.len() - 1)
        }
        b"testcase" => Node::Case,
        b"failure" | b"error" if matches!(stack.last(), Some(Node::Case)) => {
            let owner = stack.iter().rev().find_map(|node| match node {
                Node::Suite(idx) => Some(*idx),
                _ => None,
            });
            if let Some(idx) = owner {
                verdicts[idx].verdict = Verdict::Failed;
            }
            Node::Other
        }
        _ => Node::Other,
    };
    Ok(node)
}

fn positive_counter(e: &BytesStart<'_>, key: &str) -> Result<bool, NormalizeError> {
    let Some(raw) = attribute(e, key).map_err(malformed)? else {
        return Ok(false);
    };
    let count: u64 = raw
        .trim()
        .parse()
        .map_err(|_| malformed(format!("{key}={raw:?} is not a count")))?;
    Ok(count > 0)
}

fn malformed(reason: impl std::fmt::Display) -> NormalizeError {
    NormalizeError::malformed("xunit", reason)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
