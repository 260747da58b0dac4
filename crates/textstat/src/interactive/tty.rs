//! TTY detection utilities.

use std::io::IsTerminal;

/// Environment variable that disables prompts when set to anything.
pub const NON_INTERACTIVE_ENV: &str = "TEXTSTAT_NON_INTERACTIVE";

/// Check if the CLI should run in interactive mode.
///
/// Returns true if:
/// - stdin is a TTY
/// - stdout is a TTY
/// - CI environment variable is not set
/// - TEXTSTAT_NON_INTERACTIVE is not set
pub fn should_be_interactive() -> bool {
    if !std::io::stdin().is_terminal() {
        return false;
    }
    if !std::io::stdout().is_terminal() {
        return false;
    }
    interactive_allowed(|key| std::env::var_os(key).is_some())
}

/// Environment half of [`should_be_interactive`], with the lookup injected.
pub fn interactive_allowed(is_set: impl Fn(&str) -> bool) -> bool {
    !is_set("CI") && !is_set(NON_INTERACTIVE_ENV)
}
