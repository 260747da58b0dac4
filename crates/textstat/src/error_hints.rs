use std::io;

use anyhow::Error;

use crate::config::ConfigError;
use crate::load::LoadError;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for cause in err.chain() {
        if let Some(load) = cause.downcast_ref::<LoadError>() {
            match load {
                LoadError::NotFound { .. } => {
                    push_hint(&mut out, "Verify the file path exists and is readable.");
                    push_hint(
                        &mut out,
                        "Relative paths are resolved against the current working directory.",
                    );
                }
                LoadError::Read { source, .. } if source.kind() == io::ErrorKind::InvalidData => {
                    push_hint(
                        &mut out,
                        "textstat reads UTF-8 text; convert the file first (for example with `iconv`).",
                    );
                }
                LoadError::Read { .. } => {}
                LoadError::NoInput => {
                    push_hint(&mut out, "Pass the file as an argument: `textstat <FILE>`.");
                }
            }
        }

        if cause.downcast_ref::<ConfigError>().is_some() {
            push_hint(
                &mut out,
                "Check `textstat.toml` syntax and key names under `[report]`.",
            );
            push_hint(&mut out, "Use `--no-config` to ignore the config file.");
        }
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use anyhow::anyhow;

    use super::{format, suggestions};
    use crate::config::ConfigError;
    use crate::load::LoadError;

    fn not_found(path: &str) -> anyhow::Error {
        LoadError::NotFound {
            path: PathBuf::from(path),
        }
        .into()
    }

    #[test]
    fn suggests_for_missing_file() {
        let hints = suggestions(&not_found("notes.txt"));
        assert!(hints.iter().any(|h| h.contains("file path exists")));
    }

    #[test]
    fn missing_file_named_like_config_keeps_file_hints() {
        let hints = suggestions(&not_found("config/config-notes.txt"));
        assert!(hints.iter().any(|h| h.contains("file path exists")));
        assert!(!hints.iter().any(|h| h.contains("--no-config")));
    }

    #[test]
    fn suggests_for_bad_encoding() {
        let err: anyhow::Error = LoadError::Read {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        }
        .into();
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("iconv")));
    }

    #[test]
    fn suggests_for_bad_config() {
        let err: anyhow::Error = ConfigError {
            path: PathBuf::from("textstat.toml"),
            source: io::Error::new(io::ErrorKind::InvalidData, "unknown field `colour`"),
        }
        .into();
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("--no-config")));
        assert!(!hints.iter().any(|h| h.contains("file path exists")));
    }

    #[test]
    fn suggests_for_missing_argument() {
        let hints = suggestions(&LoadError::NoInput.into());
        assert!(hints.iter().any(|h| h.contains("textstat <FILE>")));
    }

    #[test]
    fn hints_found_behind_added_context() {
        let err = not_found("a.txt").context("while analyzing");
        assert!(suggestions(&err).iter().any(|h| h.contains("file path exists")));
    }

    #[test]
    fn message_text_alone_does_not_trigger_hints() {
        let err = anyhow!("config 'x' not found");
        assert!(suggestions(&err).is_empty());
        assert_eq!(format(&err), "Error: config 'x' not found");
    }

    #[test]
    fn format_includes_hints_section() {
        let rendered = format(&not_found("no-file"));
        assert!(rendered.starts_with("Error: File 'no-file' not found"));
        assert!(rendered.contains("Hints:"));
    }
}
