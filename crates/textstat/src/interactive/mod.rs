//! Interactive CLI utilities.
//!
//! TTY detection and the file-name prompt.

pub mod prompt;
pub mod tty;

pub use prompt::prompt_file_name;
pub use tty::should_be_interactive;
