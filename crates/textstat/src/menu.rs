//! The numbered report menu.
//!
//! The loop is generic over its input and output so it runs the same against
//! a terminal, a pipe, or an in-memory buffer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use textstat_config::ReportKind;
use textstat_metrics::TextStats;

use crate::render::{RULE, render_section};

pub const MENU: &str = "\
Choose what to display:
1 - Line count
2 - Character count
3 - Empty line count
4 - Character frequency
0 - Exit";

pub const PROMPT: &str = "Enter numbers separated by spaces (e.g. 1 2 4) or 0 to exit: ";

/// One whitespace-separated token of a menu answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Report(ReportKind),
    Unknown(String),
}

/// A full line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Exit,
    Choices(Vec<Choice>),
}

/// Menu number for a report kind.
pub fn menu_number(kind: ReportKind) -> u8 {
    match kind {
        ReportKind::Lines => 1,
        ReportKind::Chars => 2,
        ReportKind::EmptyLines => 3,
        ReportKind::Frequency => 4,
    }
}

pub fn report_for_token(token: &str) -> Option<ReportKind> {
    ReportKind::ALL
        .into_iter()
        .find(|kind| token == menu_number(*kind).to_string())
}

/// Interpret one answer line.
///
/// Only a lone `0` exits; a `0` mixed with other tokens is an unknown choice.
pub fn parse_choices(line: &str) -> MenuInput {
    if line.trim() == "0" {
        return MenuInput::Exit;
    }
    let choices = line
        .split_whitespace()
        .map(|token| match report_for_token(token) {
            Some(kind) => Choice::Report(kind),
            None => Choice::Unknown(token.to_string()),
        })
        .collect();
    MenuInput::Choices(choices)
}

/// Rendered output for one batch of choices, framed by rules.
pub fn render_choices(stats: &TextStats, choices: &[Choice], top: usize) -> String {
    let mut out = format!("\n{RULE}\n");
    for choice in choices {
        match choice {
            Choice::Report(kind) => out.push_str(&render_section(stats, *kind, top)),
            Choice::Unknown(token) => out.push_str(&format!("Unknown choice: {token}\n")),
        }
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Show the menu and answer choices until `0` or end of input.
pub fn run_menu<R, W>(stats: &TextStats, top: usize, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "\n{MENU}\n\n{PROMPT}").context("Failed to write menu")?;
        output.flush().context("Failed to flush menu")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read menu choice")?;
        if read == 0 {
            tracing::debug!("menu input closed");
            writeln!(output).context("Failed to write menu")?;
            return Ok(());
        }

        match parse_choices(&line) {
            MenuInput::Exit => return Ok(()),
            MenuInput::Choices(choices) => {
                tracing::debug!(count = choices.len(), "menu choices");
                output
                    .write_all(render_choices(stats, &choices, top).as_bytes())
                    .context("Failed to write report")?;
            }
        }
    }
}
