//! Test builders — terse constructors for expected records.
//!
//! These are for readable expectations, not production use.

use steplog_core::{StepRecord, TestCaseRecord, NO_OUTPUT};

/// A step with the given outcome and captured lines.
pub fn step(passed: bool, lines: &[&str]) -> StepRecord {
    StepRecord {
        passed,
        output_lines: lines.iter().map(|line| line.to_string()).collect(),
    }
}

/// A step that captured nothing.
pub fn silent(passed: bool) -> StepRecord {
    StepRecord::silent(passed, NO_OUTPUT)
}

pub fn case(name: &str, steps: Vec<StepRecord>) -> TestCaseRecord {
    TestCaseRecord {
        name: name.to_string(),
        steps,
    }
}

/// Render a Robot `output.xml` with one leaf suite per `(source, tests)` pair.
///
/// Each test is `(name, steps)`; each step is a list of `(level, text)`
/// messages emitted after a `TEST STEP n` marker.
pub fn robot_xml(suites: &[(&str, Vec<(String, Vec<Vec<(&str, String)>>)>)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<robot generator=\"Robot 6.1.1\">\n<suite id=\"s1\" name=\"Root\" source=\"/work/test\">\n",
    );
    for (source, tests) in suites {
        xml.push_str(&format!("<suite name=\"leaf\" source=\"{source}\">\n"));
        for (name, steps) in tests {
            xml.push_str(&format!("<test name=\"{name}\">\n"));
            for (idx, messages) in steps.iter().enumerate() {
                xml.push_str(&format!(
                    "<kw name=\"Log\"><msg level=\"INFO\">TEST STEP {}</msg></kw>\n",
                    idx + 1
                ));
                xml.push_str("<kw name=\"Do\">");
                for (level, text) in messages {
                    xml.push_str(&format!("<msg level=\"{level}\">{}</msg>", escape(text)));
                }
                xml.push_str("</kw>\n");
            }
            xml.push_str("</test>\n");
        }
        xml.push_str("</suite>\n");
    }
    xml.push_str("</suite>\n</robot>\n");
    xml
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
