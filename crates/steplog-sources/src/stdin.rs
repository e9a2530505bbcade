//! Stdin source: reads a piped log until EOF.

use std::io::Read;

use steplog_core::NormalizeError;

use crate::LogSource;

/// Stdin has no file name, so the format must be given explicitly.
#[derive(Debug, Default)]
pub struct StdinSource;

impl LogSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_all(&mut self) -> Result<Vec<u8>, NormalizeError> {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
