//! Command-line surface of the `steplog` binary.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use steplog_core::config::Config;
use steplog_core::report::{self, Summary};
use steplog_core::{xunit, LogFormat, Normalizer, TestCaseRecord};
use steplog_sources::{FileSource, LogSource};

#[derive(Debug, Parser)]
#[command(name = "steplog", about = "Normalize Robot Framework and Ceedling logs into step results")]
pub struct Cli {
    /// Write debug logs to /tmp/steplog-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/steplog/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the test cases and steps found in a log (`-` reads stdin).
    Normalize {
        path: PathBuf,
        /// robot | ceedling; detected from the extension when omitted.
        #[arg(long)]
        format: Option<LogFormat>,
        /// Emit JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },
    /// Print per-suite verdicts from an xUnit result file as JSON.
    Verdicts { path: PathBuf },
    /// Join xUnit verdicts with a log's step records and print JSON.
    Report {
        #[arg(long)]
        xunit: PathBuf,
        #[arg(long)]
        log: PathBuf,
        #[arg(long)]
        format: Option<LogFormat>,
        /// Expected step count for a case, as NAME=COUNT. Repeatable.
        #[arg(long = "expect", value_parser = parse_expectation)]
        expect: Vec<(String, usize)>,
    },
}

impl Cli {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => defaults_on_error(Config::load(), &mut std::io::stderr()),
        };
        let normalizer = Normalizer::new(&config);

        match &self.command {
            Command::Normalize { path, format, json } => {
                let records = read_records(path, *format, &normalizer)?;
                if *json {
                    write_json(out, &records)?;
                } else {
                    write!(out, "{}", Summary(&records))?;
                }
            }
            Command::Verdicts { path } => {
                let bytes = FileSource::new(path).read_all()?;
                write_json(out, &xunit::parse_verdicts(&bytes)?)?;
            }
            Command::Report {
                xunit: xunit_path,
                log,
                format,
                expect,
            } => {
                let bytes = FileSource::new(xunit_path).read_all()?;
                let verdicts = xunit::parse_verdicts(&bytes)?;
                let records = read_records(log, *format, &normalizer)?;
                let expected: HashMap<String, usize> = expect.iter().cloned().collect();
                let cases = report::assemble(
                    &verdicts,
                    &records,
                    &expected,
                    &normalizer.markers().no_output,
                );
                write_json(out, &cases)?;
            }
        }
        Ok(())
    }
}

/// Fall back to the built-in defaults, telling the user why on `warn`.
fn defaults_on_error(loaded: anyhow::Result<Config>, warn: &mut impl Write) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable; using defaults");
        let _ = writeln!(warn, "steplog: warning: {err:#}; using default config");
        Config::defaults()
    })
}

fn read_records(
    path: &Path,
    format: Option<LogFormat>,
    normalizer: &Normalizer,
) -> anyhow::Result<Vec<TestCaseRecord>> {
    let mut source = steplog_sources::open(path);
    Ok(steplog_sources::normalize_source(source.as_mut(), format, normalizer)?)
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn parse_expectation(raw: &str) -> Result<(String, usize), String> {
    let (name, count) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=COUNT, got {raw:?}"))?;
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("step count must be a number, got {count:?}"))?;
    Ok((name.trim().to_string(), count))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
