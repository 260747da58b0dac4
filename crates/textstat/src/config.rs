use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use textstat_config::{self as cli, OutputFormat, ReportKind, TomlConfig};
use thiserror::Error;

/// A config file that could not be read or parsed.
#[derive(Debug, Error)]
#[error("Failed to load config {}", .path.display())]
pub struct ConfigError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Effective settings after applying flag > config file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reports: Vec<ReportKind>,
    pub format: OutputFormat,
    pub top: usize,
}

/// Load the config selected by `--config`, or `textstat.toml` in `cwd`.
///
/// An explicit `--config` must exist; a missing discovered file is not an error.
pub(crate) fn load_config(args: &cli::Cli, cwd: &Path) -> Result<Option<TomlConfig>> {
    if args.no_config {
        return Ok(None);
    }
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match TomlConfig::discover(cwd) {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    tracing::debug!(config = %path.display(), "loading config");
    match TomlConfig::from_file(&path) {
        Ok(config) => Ok(Some(config)),
        Err(source) => Err(ConfigError { path, source }.into()),
    }
}

pub fn resolve(args: &cli::Cli, config: Option<&TomlConfig>) -> Settings {
    let report = config.map(|c| &c.report);
    let reports = if args.reports.is_empty() {
        report
            .and_then(|r| r.default.clone())
            .filter(|kinds| !kinds.is_empty())
            .unwrap_or_else(|| ReportKind::ALL.to_vec())
    } else {
        args.reports.clone()
    };
    Settings {
        reports,
        format: args
            .format
            .or_else(|| report.and_then(|r| r.format))
            .unwrap_or_default(),
        top: args.top.or_else(|| report.and_then(|r| r.top)).unwrap_or(0),
    }
}
