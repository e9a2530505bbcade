//! Robot Framework `output.xml` dialect.
//!
//! Streams the document with `quick-xml` and keeps a frame stack so only
//! `<msg>` elements sitting directly under a `<kw>` of a test in a leaf suite
//! reach the cursor. A suite is a leaf when its `source` attribute names a
//! `.robot` file; other suites are descended into, suites under a leaf are not.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::cursor::CaseCursor;
use crate::config::{MarkersConfig, RobotConfig};
use crate::error::NormalizeError;
use crate::types::LogFormat;
use crate::xml::attribute;

#[derive(Debug)]
enum Frame {
    /// The document element (`<robot>`).
    Root,
    Suite { leaf: bool, reachable: bool },
    Case,
    Keyword { in_case: bool },
    Message { failed: bool, text: String },
    Other,
}

pub(crate) struct RobotScanner<'a> {
    pub(crate) markers: &'a MarkersConfig,
    pub(crate) robot: &'a RobotConfig,
}

impl RobotScanner<'_> {
    pub(crate) fn scan(&self, input: &[u8], cursor: &mut CaseCursor<'_>) -> Result<(), NormalizeError> {
        let mut reader = Reader::from_reader(input);
        let mut buf = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

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
                    let frame = self.enter(&e, stack.last(), cursor)?;
                    stack.push(frame);
                }
                Ok(Event::Empty(e)) => {
                    let frame = self.enter(&e, stack.last(), cursor)?;
                    self.leave(frame, cursor);
                }
                Ok(Event::Text(t)) => {
                    if let Some(Frame::Message { text, .. }) = stack.last_mut() {
                        text.push_str(&t.unescape().map_err(malformed)?);
                    }
                }
                Ok(Event::CData(c)) => {
                    if let Some(Frame::Message { text, .. }) = stack.last_mut() {
                        text.push_str(std::str::from_utf8(&c).map_err(malformed)?);
                    }
                }
                Ok(Event::End(_)) => {
                    let frame = stack
                        .pop()
                        .ok_or_else(|| malformed("closing tag without an open element"))?;
                    self.leave(frame, cursor);
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
        Ok(())
    }

    fn enter(
        &self,
        e: &BytesStart<'_>,
        parent: Option<&Frame>,
        cursor: &mut CaseCursor<'_>,
    ) -> Result<Frame, NormalizeError> {
        let Some(parent) = parent else {
            return Ok(Frame::Root);
        };

        let frame = match e.local_name().as_ref() {
            b"suite" => {
                let reachable = matches!(
                    parent,
                    Frame::Root | Frame::Suite { leaf: false, reachable: true }
                );
                let leaf = reachable
                    && attribute(e, "source")
                        .map_err(malformed)?
                        .is_some_and(|src| src.contains(&self.robot.leaf_suite_suffix));
                Frame::Suite { leaf, reachable }
            }
            b"test" if matches!(parent, Frame::Suite { leaf: true, .. }) => {
                let name = attribute(e, "name")
                    .map_err(malformed)?
                    .ok_or_else(|| malformed("<test> element without a name attribute"))?;
                cursor.open_case(name);
                Frame::Case
            }
            b"kw" => Frame::Keyword {
                in_case: matches!(parent, Frame::Case),
            },
            b"msg" if matches!(parent, Frame::Keyword { in_case: true }) => {
                let failed = attribute(e, "level")
                    .map_err(malformed)?
                    .is_some_and(|level| level == self.markers.fail_level);
                Frame::Message {
                    failed,
                    text: String::new(),
                }
            }
            _ => Frame::Other,
        };
        Ok(frame)
    }

    fn leave(&self, frame: Frame, cursor: &mut CaseCursor<'_>) {
        let Frame::Message { failed, text } = frame else {
            return;
        };

        if text.contains(&self.markers.step) {
            cursor.open_step();
            return;
        }
        if failed {
            cursor.mark_failed();
        }
        if !text.contains(&self.robot.discard_token) {
            cursor.capture(text);
        }
    }
}

fn malformed(reason: impl std::fmt::Display) -> NormalizeError {
    NormalizeError::malformed(LogFormat::Robot, reason)
}
