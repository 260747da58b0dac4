//! # textstat-metrics
//!
//! **Tier 0 (Pure Metrics)**
//!
//! Deterministic text metrics for the `textstat` CLI.
//!
//! ## What belongs here
//! * Line, character and empty-line counting
//! * Character frequency tables
//! * Newline normalization
//!
//! ## What does NOT belong here
//! * File I/O
//! * Rendering or CLI concerns

#![forbid(unsafe_code)]

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

/// Characters that end a line, besides the `\r\n` pair.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(ch: char) -> bool {
    LINE_BREAKS.contains(&ch)
}

/// Iterator over the lines of a text, without their terminators.
///
/// Created by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((idx, ch)) => {
                let line = &self.rest[..idx];
                let mut end = idx + ch.len_utf8();
                if ch == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split `text` on universal line boundaries.
///
/// A terminator at the very end does not start another line, so `"a\n"`
/// yields one line and `""` yields none.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

#[must_use]
pub fn count_lines(text: &str) -> usize {
    lines(text).count()
}

/// Number of Unicode scalar values in `text`.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Lines that are empty or contain only whitespace.
///
/// The information separators U+001C..=U+001F count as whitespace here, on
/// top of the Unicode `White_Space` set.
#[must_use]
pub fn count_empty_lines(text: &str) -> usize {
    lines(text)
        .filter(|line| line.chars().all(is_blank))
        .count()
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// One row of a character frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCount {
    #[serde(rename = "char")]
    pub ch: char,
    pub count: usize,
}

/// Count every character in `text`.
///
/// Rows are sorted by count, highest first. Equal counts keep the order in
/// which the characters first appear.
#[must_use]
pub fn char_frequency(text: &str) -> Vec<CharCount> {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut rows: Vec<CharCount> = Vec::new();
    for ch in text.chars() {
        let slot = *index.entry(ch).or_insert_with(|| {
            rows.push(CharCount { ch, count: 0 });
            rows.len() - 1
        });
        rows[slot].count += 1;
    }
    // sort_by is stable; ties stay in first-seen order.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Translate `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// All metrics for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub lines: usize,
    pub chars: usize,
    pub empty_lines: usize,
    pub frequency: Vec<CharCount>,
}

impl TextStats {
    pub fn compute(text: &str) -> Self {
        Self {
            lines: count_lines(text),
            chars: count_chars(text),
            empty_lines: count_empty_lines(text),
            frequency: char_frequency(text),
        }
    }
}
