#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use lexer::lexer::{tokenize, Lexer};
pub use parser::parser::{parse, Parser};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line's text and the offset of
/// `position` within that line. An offset at or past the end of the source
/// maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len(): past the final character
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}


/// Renders `error` against the source it was found in.
///
/// ```text
/// Error: message (tip)
/// -> final.monkey:20:9
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    ErrorReport { error, source }.to_string()
}

/// An error paired with its source text, displayed as by [`render_error`].
pub struct ErrorReport<'a> {
    pub error: &'a Error,
    pub source: &'a str,
}

impl Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.error.get_position();
        let (line, line_text, line_pos) = get_line_at_position(self.source, position.0);

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error)?;
        } else {
            writeln!(f, "Error: {} ({})", self.error, self.error.get_tip())?;
        }
        writeln!(f, "-> {}:{}:{}", position.1, line, line_pos + 1)?;
        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
