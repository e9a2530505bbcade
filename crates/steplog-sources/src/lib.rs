//! steplog-sources — log source adapters for steplog.
//!
//! Each source hands the normalizer the complete bytes of one log. Handles
//! are scoped: a file is opened, drained and closed inside [`LogSource::read_all`],
//! so nothing stays open past a parse, successful or not.

pub mod file;
pub mod stdin;

use std::path::Path;

use steplog_core::{LogFormat, NormalizeError, Normalizer, TestCaseRecord};

pub use file::FileSource;
pub use stdin::StdinSource;

/// Trait implemented by each log source.
pub trait LogSource {
    /// Human-readable origin, used in log events and error messages.
    fn describe(&self) -> String;

    /// Read the whole log.
    fn read_all(&mut self) -> Result<Vec<u8>, NormalizeError>;

    /// Format implied by the source itself, if any.
    fn detected_format(&self) -> Option<Result<LogFormat, NormalizeError>> {
        None
    }
}

/// Open `path`, or stdin when `path` is `-`.
pub fn open(path: &Path) -> Box<dyn LogSource> {
    if path.as_os_str() == "-" {
        Box::new(StdinSource::default())
    } else {
        Box::new(FileSource::new(path))
    }
}

/// Resolve the format, read the source and normalise it.
///
/// An explicit `format` wins; otherwise the source must be able to detect
/// one. The format is settled before any byte is read.
pub fn normalize_source(
    source: &mut dyn LogSource,
    format: Option<LogFormat>,
    normalizer: &Normalizer,
) -> Result<Vec<TestCaseRecord>, NormalizeError> {
    let format = match format {
        Some(format) => format,
        None => source
            .detected_format()
            .unwrap_or_else(|| Err(NormalizeError::UnrecognizedFormat(source.describe())))?,
    };
    let bytes = source.read_all()?;
    tracing::debug!(source = %source.describe(), %format, bytes = bytes.len(), "log read");
    normalizer.normalize(&bytes, format)
}
