#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based (line, column) position of a token in the source text.
///
/// Locations created with [`SourceLocation::any`] are test wildcards: they
/// compare equal to every other location, so token fixtures in tests do not
/// have to spell out exact positions.
#[derive(Debug, Clone)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    wildcard: bool,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        SourceLocation {
            line,
            column,
            wildcard: false,
        }
    }

    /// Wildcard location for test fixtures.
    pub fn any() -> Self {
        SourceLocation {
            line: 0,
            column: 0,
            wildcard: true,
        }
    }

    pub fn start() -> Self {
        SourceLocation::new(1, 1)
    }
}

impl PartialEq for SourceLocation {
    fn eq(&self, other: &Self) -> bool {
        if self.wildcard || other.wildcard {
            return true;
        }
        self.line == other.line && self.column == other.column
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
           |
        20 | var a = #;
           | --------^
    */

    let location = error.get_location();
    let line_text = source
        .lines()
        .nth(location.line.saturating_sub(1) as usize)
        .unwrap_or("");

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (location.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
