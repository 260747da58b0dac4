//! # textstat
//!
//! **CLI Binary**
//!
//! This is the entry point for the `textstat` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Read the input file and compute its statistics
//! * Drive the interactive menu or print reports once
//! * Handle errors and exit codes
//!
//! Counting lives in `textstat-metrics`; this crate should contain minimal
//! business logic.

pub mod config;
mod error_hints;
pub mod interactive;
pub mod load;
pub mod menu;
pub mod render;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use textstat_config::{self as cli, OutputFormat};
use textstat_metrics::TextStats;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "TEXTSTAT_LOG";

/// Entry point used by the `textstat` binary.
pub fn run() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = config::load_config(&args, &cwd)?;
    let settings = config::resolve(&args, config.as_ref());

    let can_prompt = !args.non_interactive && interactive::should_be_interactive();
    let use_menu = can_prompt && args.reports.is_empty();
    tracing::debug!(can_prompt, use_menu, ?settings, "resolved settings");

    let path = match args.file.clone() {
        Some(path) => path,
        None if can_prompt => interactive::prompt_file_name()?,
        None => return Err(load::LoadError::NoInput.into()),
    };

    let text = load::load_text(&path)?;
    let stats = TextStats::compute(&text);
    tracing::info!(
        path = %path.display(),
        lines = stats.lines,
        chars = stats.chars,
        distinct = stats.frequency.len(),
        "computed statistics"
    );

    if use_menu {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return menu::run_menu(&stats, settings.top, stdin.lock(), stdout.lock());
    }

    let output = match settings.format {
        OutputFormat::Text => render::render_text(&stats, &settings.reports, settings.top),
        OutputFormat::Json => render::render_json(
            path.display().to_string(),
            &stats,
            &settings.reports,
            settings.top,
        )
        .context("Failed to serialize report")?,
    };
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write report")?;
    Ok(())
}

/// Render an error with its cause chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

/// Default filter for a `-v` count when `TEXTSTAT_LOG` is unset.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(9), "trace");
    }
}
