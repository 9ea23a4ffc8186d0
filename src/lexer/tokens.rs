use std::fmt::Display;

use crate::SourceLocation;

/// The lexical class of a token.
///
/// Keywords are not a class of their own: `if`, `while` and friends come out
/// of the tokenizer as `Identifier` tokens, and the parser decides by text
/// whether one acts as a keyword.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    IntLiteral,
    Operator,
    Punctuation,
    /// Synthetic sentinel handed out when reading past the last real token.
    /// Never produced by the tokenizer itself.
    End,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    /// The sentinel returned by the parser when the cursor has run past the
    /// token sequence. Carries empty text and the given location (the last
    /// real token's, by convention).
    pub fn end(location: SourceLocation) -> Token {
        Token {
            text: String::new(),
            kind: TokenKind::End,
            location,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?}) at {}", self.kind, self.text, self.location)
    }
}
