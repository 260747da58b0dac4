//! Shared helpers for textstat integration tests.

use std::path::PathBuf;

use assert_cmd::Command;

/// Path to a checked-in fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// `textstat` with a scrubbed environment, run from `cwd`.
pub fn textstat_in(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textstat"));
    cmd.current_dir(cwd)
        .env_remove("TEXTSTAT_LOG")
        .env("TEXTSTAT_NON_INTERACTIVE", "1");
    cmd
}
