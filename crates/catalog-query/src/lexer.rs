//! Scanner for canonical query text.
//!
//! The scanner owns a cursor into the input and hands out `CODE=(text)` units
//! and logic keywords one at a time. It never fails: fragments that do not form
//! a complete unit are stepped over.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::criterion::QueryLogic;
use crate::registry::is_code_char;

lazy_static! {
    static ref LOGIC_KEYWORD: Regex = Regex::new(r"^(?:AND|OR|NOT)\b").unwrap();
}

/// One `CODE=(text)` unit found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    /// Category code exactly as written
    pub code: &'a str,
    /// Unescaped content between the parentheses, untrimmed
    pub text: String,
    /// Byte range of the whole unit in the input
    pub span: Range<usize>,
}

/// Left-to-right scanner over query text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Find the next unit at or after the cursor and move past it.
    ///
    /// A code is a maximal run of word characters directly followed by `=(`;
    /// the content runs to the next unescaped `)` and must not be empty.
    pub fn next_unit(&mut self) -> Option<Unit<'a>> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        while i < bytes.len() {
            if !is_code_char(bytes[i] as char) {
                i += 1;
                continue;
            }

            let start = i;
            while i < bytes.len() && is_code_char(bytes[i] as char) {
                i += 1;
            }
            let end = i;

            if !bytes[end..].starts_with(b"=(") {
                continue;
            }
            match scan_content(self.input, end + 2) {
                Some((text, close)) => {
                    self.pos = close + 1;
                    return Some(Unit {
                        code: &self.input[start..end],
                        text,
                        span: start..close + 1,
                    });
                }
                None => {
                    tracing::debug!(
                        offset = start,
                        code = &self.input[start..end],
                        "skipping query unit without content or closing parenthesis"
                    );
                }
            }
        }

        self.pos = bytes.len();
        None
    }

    /// Consume a logic keyword following the cursor, if there is one.
    ///
    /// Leading whitespace is skipped; the keyword must end on a word boundary.
    /// On success the cursor moves past the keyword and one following space.
    pub fn take_logic(&mut self) -> Option<QueryLogic> {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        let keyword = LOGIC_KEYWORD.find(trimmed)?;
        let logic = QueryLogic::from_keyword(keyword.as_str())?;

        let mut advance = rest.len() - trimmed.len() + keyword.end();
        if rest[advance..].starts_with(' ') {
            advance += 1;
        }
        self.pos += advance;
        Some(logic)
    }
}

/// Read unit content starting at `from`, up to the next unescaped `)`.
///
/// Returns the unescaped text and the byte offset of the closing parenthesis.
/// `\)` and `\\` are escapes; any other backslash is kept as is.
fn scan_content(input: &str, from: usize) -> Option<(String, usize)> {
    let mut text = String::new();
    let mut chars = input[from..].char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            ')' if offset == 0 => return None,
            ')' => return Some((text, from + offset)),
            '\\' => match chars.peek() {
                Some(&(_, next)) if next == ')' || next == '\\' => {
                    text.push(next);
                    chars.next();
                }
                _ => text.push('\\'),
            },
            _ => text.push(c),
        }
    }

    None
}

/// Escape text so that [`Scanner`] reads it back unchanged.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ')' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
