//! Asking for the file to analyze.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::load::LoadError;

/// Turn a typed answer into a path, rejecting blank input.
pub fn path_from_answer(answer: &str) -> Result<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(LoadError::NoInput.into());
    }
    Ok(PathBuf::from(trimmed))
}

/// Prompt on the terminal for the file name.
#[cfg(feature = "ui")]
pub fn prompt_file_name() -> Result<PathBuf> {
    use console::style;
    use dialoguer::{Input, theme::ColorfulTheme};

    eprintln!("{}", style("textstat").bold().cyan());
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("File to analyze")
        .interact_text()
        .context("Failed to read file name")?;
    path_from_answer(&answer)
}

/// Prompt on stderr and read the file name from stdin.
#[cfg(not(feature = "ui"))]
pub fn prompt_file_name() -> Result<PathBuf> {
    use std::io::{BufRead, Write};

    eprint!("File to analyze: ");
    std::io::stderr().flush().context("Failed to flush prompt")?;
    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read file name")?;
    path_from_answer(&answer)
}
