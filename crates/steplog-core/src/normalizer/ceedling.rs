//! Ceedling plain-text dialect.
//!
//! Lines are split on the configured delimiter. The case and step markers
//! are looked for in the first field only; everything else inside a case is
//! an assertion outcome (enough fields) or a blank capture.

use super::cursor::CaseCursor;
use crate::config::{CeedlingConfig, MarkersConfig};

pub(crate) struct CeedlingScanner<'a> {
    pub(crate) markers: &'a MarkersConfig,
    pub(crate) ceedling: &'a CeedlingConfig,
}

impl CeedlingScanner<'_> {
    pub(crate) fn scan(&self, input: &[u8], cursor: &mut CaseCursor<'_>) {
        let text = String::from_utf8_lossy(input);
        let delim = self.ceedling.delimiter.as_str();

        for line in text.lines() {
            let head = line.split(delim).next().unwrap_or_default();

            if head.contains(&self.markers.case) {
                let name = line
                    .split_once(delim)
                    .map(|(_, rest)| rest.trim())
                    .unwrap_or_default();
                cursor.open_case(name);
            } else if head.contains(&self.markers.step) {
                cursor.open_step();
            } else if cursor.has_open_case() {
                self.assertion(line, cursor);
            }
        }
    }

    fn assertion(&self, line: &str, cursor: &mut CaseCursor<'_>) {
        let fields: Vec<&str> = line.split(self.ceedling.delimiter.as_str()).collect();
        if fields.len() < self.ceedling.assertion_fields {
            cursor.capture(String::new());
            return;
        }
        if fields[self.ceedling.verdict_field] == self.markers.fail_level {
            cursor.mark_failed();
        }
        cursor.capture(format_assertion(line));
    }
}

/// Wrap an assertion line in wiki monospace markup, escaping `_`.
pub fn format_assertion(line: &str) -> String {
    format!("{{{{ {} }}}}\\", line.replace('_', "~_"))
}
