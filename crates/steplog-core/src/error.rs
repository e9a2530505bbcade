//! Error type shared by the normalizer, the xUnit reader and the sources.

use std::fmt::Display;

/// Why a log could not be turned into records.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The input does not parse as the declared format, or it contains no
    /// case boundary at all. No partial records accompany this error.
    #[error("malformed {format} log: {reason}")]
    MalformedLog { format: String, reason: String },

    /// The declared format (name or file extension) is not one we read.
    #[error("unrecognized log format: {0:?}")]
    UnrecognizedFormat(String),

    #[error("cannot read log: {0}")]
    Io(#[from] std::io::Error),
}

impl NormalizeError {
    pub fn malformed(format: impl Display, reason: impl Display) -> Self {
        NormalizeError::MalformedLog {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }
}
