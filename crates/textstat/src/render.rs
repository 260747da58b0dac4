//! Text and JSON rendering of computed statistics.

use serde::Serialize;
use textstat_config::ReportKind;
use textstat_metrics::{CharCount, TextStats};

/// Separator printed around each batch of menu output.
pub const RULE: &str = "==================================================";

/// Printable form of a frequency-table character.
///
/// Newline, tab and carriage return are shown quoted and escaped (`'\n'`);
/// everything else is printed as-is.
pub fn display_char(ch: char) -> String {
    match ch {
        '\n' => "'\\n'".to_string(),
        '\t' => "'\\t'".to_string(),
        '\r' => "'\\r'".to_string(),
        other => other.to_string(),
    }
}

/// The first `top` rows, or all rows when `top` is 0.
pub fn top_rows(rows: &[CharCount], top: usize) -> &[CharCount] {
    if top == 0 || top >= rows.len() {
        rows
    } else {
        &rows[..top]
    }
}

/// One report section, each line newline-terminated.
pub fn render_section(stats: &TextStats, kind: ReportKind, top: usize) -> String {
    match kind {
        ReportKind::Lines => format!("Lines: {}\n", stats.lines),
        ReportKind::Chars => format!("Characters: {}\n", stats.chars),
        ReportKind::EmptyLines => format!("Empty lines: {}\n", stats.empty_lines),
        ReportKind::Frequency => {
            let mut out = String::from("Character frequency:\n");
            for row in top_rows(&stats.frequency, top) {
                out.push_str(&format!("  {}: {}\n", display_char(row.ch), row.count));
            }
            out
        }
    }
}

pub fn render_text(stats: &TextStats, kinds: &[ReportKind], top: usize) -> String {
    kinds
        .iter()
        .map(|kind| render_section(stats, *kind, top))
        .collect()
}

/// JSON document holding only the selected sections.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<&'a [CharCount]>,
}

impl<'a> JsonReport<'a> {
    pub fn new(file: String, stats: &'a TextStats, kinds: &[ReportKind], top: usize) -> Self {
        let wants = |kind: ReportKind| kinds.contains(&kind);
        Self {
            file,
            lines: wants(ReportKind::Lines).then_some(stats.lines),
            chars: wants(ReportKind::Chars).then_some(stats.chars),
            empty_lines: wants(ReportKind::EmptyLines).then_some(stats.empty_lines),
            frequency: wants(ReportKind::Frequency).then(|| top_rows(&stats.frequency, top)),
        }
    }
}

pub fn render_json(
    file: String,
    stats: &TextStats,
    kinds: &[ReportKind],
    top: usize,
) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&JsonReport::new(file, stats, kinds, top))?;
    out.push('\n');
    Ok(out)
}
