//! Static log corpora used across harnesses.
//!
//! The Robot and Ceedling corpora describe different runs; the xUnit corpus
//! carries verdicts for the Ceedling run so the report harness can join them.

use std::path::{Path, PathBuf};

/// Robot Framework `output.xml` with two leaf suites and three tests.
///
/// Suite setup keywords, `<arg>`/`<status>` text and empty process output
/// (`b''`) are all present and must not leak into step output.
pub const ROBOT_OUTPUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 6.1.1 (Python 3.11.4 on linux)" generated="20240115 10:00:00.000" rpa="false" schemaversion="4">
<suite id="s1" name="Hil" source="/work/test/hil">
<suite id="s1-s1" name="Amplifier" source="/work/test/hil/amplifier.robot">
<kw name="Open Serial" type="SETUP">
<msg timestamp="20240115 10:00:00.100" level="FAIL">TEST STEP setup</msg>
</kw>
<test id="s1-s1-t1" name="amplifier_mute__success" line="12">
<kw name="Log" library="BuiltIn">
<arg>TEST STEP 1</arg>
<msg timestamp="20240115 10:00:01.000" level="INFO">TEST STEP 1</msg>
<status status="PASS" starttime="20240115 10:00:01.000" endtime="20240115 10:00:01.001"/>
</kw>
<kw name="Send Command" library="Hil">
<msg timestamp="20240115 10:00:01.100" level="INFO">mute -&gt; OK</msg>
<msg timestamp="20240115 10:00:01.101" level="INFO">stderr: b''</msg>
</kw>
<kw name="Log" library="BuiltIn">
<msg timestamp="20240115 10:00:01.200" level="INFO">TEST STEP 2</msg>
</kw>
<kw name="Read Register" library="Hil">
<msg timestamp="20240115 10:00:01.300" level="INFO">reg 0x10 = 0x01</msg>
</kw>
<status status="PASS" starttime="20240115 10:00:01.000" endtime="20240115 10:00:01.400"/>
</test>
<test id="s1-s1-t2" name="amplifier_gain__range" line="20">
<kw name="Log" library="BuiltIn">
<msg timestamp="20240115 10:00:02.000" level="INFO">TEST STEP 1</msg>
</kw>
<kw name="Should Be Equal" library="BuiltIn">
<msg timestamp="20240115 10:00:02.100" level="FAIL">12 != 14</msg>
</kw>
<kw name="Log" library="BuiltIn">
<msg timestamp="20240115 10:00:02.200" level="INFO">TEST STEP 2</msg>
</kw>
<status status="FAIL" starttime="20240115 10:00:02.000" endtime="20240115 10:00:02.300">12 != 14</status>
</test>
<status status="FAIL" starttime="20240115 10:00:00.000" endtime="20240115 10:00:02.400"/>
</suite>
<suite id="s1-s2" name="Flash" source="/work/test/hil/flash.robot">
<test id="s1-s2-t1" name="flash_erase__success" line="8">
<kw name="Log" library="BuiltIn">
<msg timestamp="20240115 10:00:03.000" level="INFO">TEST STEP 1</msg>
</kw>
<kw name="Erase" library="Hil">
<msg timestamp="20240115 10:00:03.100" level="DEBUG">erasing sector 3</msg>
<msg timestamp="20240115 10:00:03.200" level="INFO">done</msg>
</kw>
<status status="PASS" starttime="20240115 10:00:03.000" endtime="20240115 10:00:03.300"/>
</test>
<status status="PASS" starttime="20240115 10:00:03.000" endtime="20240115 10:00:03.300"/>
</suite>
<status status="FAIL" starttime="20240115 10:00:00.000" endtime="20240115 10:00:03.300"/>
</suite>
<statistics>
<total><stat pass="2" fail="1" skip="0">All Tests</stat></total>
</statistics>
<errors>
</errors>
</robot>
"#;

/// Number of `<test>` elements in leaf suites of [`ROBOT_OUTPUT_XML`].
pub const ROBOT_OUTPUT_TESTS: usize = 3;

/// Ceedling console output covering a duplicate step marker, a failing
/// assertion, a separator line and a trailing empty step.
pub const CEEDLING_OUTPUT_TXT: &str = "\
TEST CASE:test_adc_init__success
TEST STEP:
TEST STEP:
test/test_adc.c:31:test_adc_init__success:PASS:init ok
TEST STEP:
test/test_adc.c:33:test_adc_init__success:PASS:channel ok
TEST CASE:test_adc_read__range
TEST STEP:
test/test_adc.c:45:test_adc_read__range:FAIL: Expected 5 Was 7
-----------------------
TEST STEP:
";

/// xUnit results for the Ceedling run, plus a suite the log never mentions.
pub const XUNIT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<testsuites tests="3" failures="1">
  <testsuite name="test_adc_init__success" tests="1" failures="0">
    <testcase name="test_adc_init__success" classname="test_adc"/>
  </testsuite>
  <testsuite name="test_adc_read__range" tests="1" failures="1">
    <testcase name="test_adc_read__range" classname="test_adc">
      <failure message="Expected 5 Was 7">test/test_adc.c:45</failure>
    </testcase>
  </testsuite>
  <testsuite name="test_adc_deinit__success" tests="1" failures="0">
    <testcase name="test_adc_deinit__success" classname="test_adc"/>
  </testsuite>
</testsuites>
"#;

// ---------------------------------------------------------------------------
// Fixture file helpers
// ---------------------------------------------------------------------------

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture write");
    path
}
