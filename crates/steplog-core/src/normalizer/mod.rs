//! Normalizer — turns raw test-log bytes into [`TestCaseRecord`](crate::TestCaseRecord) values.
//!
//! Both dialects feed one [`cursor::CaseCursor`], which owns the case/step
//! finalization rules. Robot logs open a step per boundary; Ceedling logs
//! collapse a boundary that arrives before the open step saw any content.

mod ceedling;
mod cursor;
mod robot;

pub use ceedling::format_assertion;

use tracing::debug;

use crate::config::{CeedlingConfig, Config, MarkersConfig, RobotConfig};
use crate::error::NormalizeError;
use crate::types::{LogFormat, TestCaseRecord};
use ceedling::CeedlingScanner;
use cursor::{CaseCursor, EmptyStepPolicy};
use robot::RobotScanner;

/// Normalise `input` with the default markers.
pub fn normalize(input: &[u8], format: LogFormat) -> Result<Vec<TestCaseRecord>, NormalizeError> {
    Normalizer::default().normalize(input, format)
}

/// A normalizer bound to a set of markers. Holds no per-run state, so one
/// instance can be reused across any number of logs.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    markers: MarkersConfig,
    robot: RobotConfig,
    ceedling: CeedlingConfig,
}

impl Normalizer {
    pub fn new(config: &Config) -> Self {
        Self {
            markers: config.markers.clone(),
            robot: config.robot.clone(),
            ceedling: config.ceedling.clone(),
        }
    }

    pub fn markers(&self) -> &MarkersConfig {
        &self.markers
    }

    /// Parse a whole log. Either every case comes back or an error does.
    pub fn normalize(
        &self,
        input: &[u8],
        format: LogFormat,
    ) -> Result<Vec<TestCaseRecord>, NormalizeError> {
        let sentinel = self.markers.no_output.as_str();

        let records = match format {
            LogFormat::Robot => {
                let mut cursor = CaseCursor::new(sentinel, EmptyStepPolicy::Keep);
                RobotScanner {
                    markers: &self.markers,
                    robot: &self.robot,
                }
                .scan(input, &mut cursor)?;
                cursor.finish()
            }
            LogFormat::Ceedling => {
                let mut cursor = CaseCursor::new(sentinel, EmptyStepPolicy::Collapse);
                CeedlingScanner {
                    markers: &self.markers,
                    ceedling: &self.ceedling,
                }
                .scan(input, &mut cursor);
                cursor.finish()
            }
        };

        if records.is_empty() {
            return Err(NormalizeError::malformed(format, "no test case found"));
        }

        debug!(%format, cases = records.len(), "log normalised");
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
