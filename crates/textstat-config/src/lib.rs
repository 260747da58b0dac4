//! # textstat-config
//!
//! **Tier 1 (Configuration)**
//!
//! CLI arguments and configuration file structures for `textstat`.
//!
//! ## What belongs here
//! * Clap `Parser` and `ValueEnum` definitions
//! * `textstat.toml` struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Text metrics
//! * Rendering
//! * Flag/config precedence (resolved by the binary)

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "textstat.toml";

/// `textstat` — line, character and character-frequency statistics for a text file.
///
/// Without `--report`, an interactive terminal gets a numbered menu; otherwise
/// all reports are printed once.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "textstat", version, about, long_about = None)]
pub struct Cli {
    /// File to analyze. Prompted for when omitted in an interactive terminal.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report(s) to print, skipping the menu. Repeatable or comma-separated.
    ///
    /// Examples:
    ///   --report lines
    ///   --report lines,freq
    #[arg(
        long = "report",
        short = 'r',
        value_enum,
        value_delimiter = ',',
        value_name = "KIND"
    )]
    pub reports: Vec<ReportKind>,

    /// Output format for non-interactive runs [default: text].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show only the N most frequent characters (0 = all).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Read settings from this file instead of ./textstat.toml.
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any textstat.toml.
    #[arg(long)]
    pub no_config: bool,

    /// Never prompt; print the selected reports once and exit.
    #[arg(long)]
    pub non_interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One section of the analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ReportKind {
    /// Number of lines.
    #[serde(rename = "lines")]
    #[value(name = "lines")]
    Lines,
    /// Number of characters.
    #[serde(rename = "chars")]
    #[value(name = "chars")]
    Chars,
    /// Number of empty or whitespace-only lines.
    #[serde(rename = "empty", alias = "empty-lines")]
    #[value(name = "empty", alias = "empty-lines")]
    EmptyLines,
    /// Character frequency table, most frequent first.
    #[serde(rename = "freq", alias = "frequency")]
    #[value(name = "freq", alias = "frequency")]
    Frequency,
}

impl ReportKind {
    /// Every report, in menu order.
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Lines,
        ReportKind::Chars,
        ReportKind::EmptyLines,
        ReportKind::Frequency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Lines => "lines",
            ReportKind::Chars => "chars",
            ReportKind::EmptyLines => "empty",
            ReportKind::Frequency => "freq",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Root of `textstat.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub report: ReportConfig,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Reports printed when `--report` is absent and the menu is not shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<ReportKind>>,

    /// Frequency row limit (0 = all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,

    /// Output format for non-interactive runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// `dir/textstat.toml` if it exists.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}
