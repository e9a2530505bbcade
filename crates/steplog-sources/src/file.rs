//! File source: reads a log from disk in one go.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use steplog_core::{LogFormat, NormalizeError};

use crate::LogSource;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all(&mut self) -> Result<Vec<u8>, NormalizeError> {
        let mut file = File::open(&self.path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn detected_format(&self) -> Option<Result<LogFormat, NormalizeError>> {
        Some(LogFormat::detect(&self.path))
    }
}
