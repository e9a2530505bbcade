//! Configuration types for steplog.
//!
//! [`Config::load`] reads `~/.config/steplog/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads
//! an explicit path layered over the same defaults. [`Config::defaults`]
//! returns the defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[markers]
case       = "TEST CASE"
step       = "TEST STEP"
fail_level = "FAIL"
no_output  = "---"

[robot]
leaf_suite_suffix = ".robot"
discard_token     = "b''"

[ceedling]
delimiter        = ":"
assertion_fields = 5
verdict_field    = 3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/steplog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markers: MarkersConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub ceedling: CeedlingConfig,
}

/// `[markers]` section: tokens shared by both log dialects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkersConfig {
    /// Opens a new test case (plain-text logs).
    #[serde(default = "default_case")]
    pub case: String,
    /// Opens a new step.
    #[serde(default = "default_step")]
    pub step: String,
    /// Severity / verdict token that marks a step failed.
    #[serde(default = "default_fail_level")]
    pub fail_level: String,
    /// Written in place of the output of a step that captured nothing.
    #[serde(default = "default_no_output")]
    pub no_output: String,
}

fn default_case() -> String { "TEST CASE".to_string() }
fn default_step() -> String { "TEST STEP".to_string() }
fn default_fail_level() -> String { "FAIL".to_string() }
fn default_no_output() -> String { crate::types::NO_OUTPUT.to_string() }

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            case: default_case(),
            step: default_step(),
            fail_level: default_fail_level(),
            no_output: default_no_output(),
        }
    }
}

/// `[robot]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobotConfig {
    /// A suite whose `source` contains this is a leaf suite holding tests.
    #[serde(default = "default_leaf_suite_suffix")]
    pub leaf_suite_suffix: String,
    /// Messages containing this token are dropped (empty process output).
    #[serde(default = "default_discard_token")]
    pub discard_token: String,
}

fn default_leaf_suite_suffix() -> String { ".robot".to_string() }
fn default_discard_token() -> String { "b''".to_string() }

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            leaf_suite_suffix: default_leaf_suite_suffix(),
            discard_token: default_discard_token(),
        }
    }
}

/// `[ceedling]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CeedlingConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Minimum field count for a line to be read as an assertion outcome.
    #[serde(default = "default_assertion_fields")]
    pub assertion_fields: usize,
    /// Index of the field holding the PASS/FAIL token.
    #[serde(default = "default_verdict_field")]
    pub verdict_field: usize,
}

fn default_delimiter() -> String { ":".to_string() }
fn default_assertion_fields() -> usize { 5 }
fn default_verdict_field() -> usize { 3 }

impl Default for CeedlingConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            assertion_fields: default_assertion_fields(),
            verdict_field: default_verdict_field(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: MarkersConfig::default(),
            robot: RobotConfig::default(),
            ceedling: CeedlingConfig::default(),
        }
    }
}

impl Config {
    /// Load from `~/.config/steplog/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.markers.case.is_empty() || self.markers.step.is_empty() {
            anyhow::bail!("[markers] case and step must not be empty");
        }
        if self.ceedling.delimiter.is_empty() {
            anyhow::bail!("[ceedling] delimiter must not be empty");
        }
        if self.ceedling.verdict_field >= self.ceedling.assertion_fields {
            anyhow::bail!(
                "[ceedling] verdict_field ({}) must be below assertion_fields ({})",
                self.ceedling.verdict_field,
                self.ceedling.assertion_fields
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("steplog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
