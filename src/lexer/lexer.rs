use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    SourceLocation, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type PatternHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

/// Scanner state for one `tokenize` call.
///
/// Patterns are tried in order at the current position; the first one whose
/// match starts exactly there wins. Comments sit before operators in the
/// table so that `//` is not eaten as a division operator.
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    // byte offset just past the most recent newline
    line_start: usize,
    // set after an int literal; forbids "2var" and "12 34abc"-style runs
    needs_separator: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            line_start: 0,
            needs_separator: false,
            tokens: vec![],
            patterns: vec![
                RegexPattern {
                    regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(),
                    handler: identifier_handler,
                },
                RegexPattern {
                    regex: Regex::new("[0-9]+").unwrap(),
                    handler: int_literal_handler,
                },
                RegexPattern {
                    regex: Regex::new("[ \t\n]+").unwrap(),
                    handler: skip_handler,
                },
                RegexPattern {
                    regex: Regex::new("(//|#)[^\n]*").unwrap(),
                    handler: skip_handler,
                },
                RegexPattern {
                    regex: Regex::new("==|!=|<=|>=|[-+*/%=<>]").unwrap(),
                    handler: operator_handler,
                },
                RegexPattern {
                    regex: Regex::new("[(){},;]").unwrap(),
                    handler: punctuation_handler,
                },
            ],
            source: String::from(source),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes `n` bytes without producing a token, keeping the line
    /// counter in step with any newlines in the skipped run.
    pub fn skip_n(&mut self, n: usize) {
        let bytes = self.source.as_bytes();
        for i in self.pos..self.pos + n {
            if bytes[i] == b'\n' {
                self.line += 1;
                self.line_start = i + 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, (self.pos - self.line_start + 1) as u32)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn check_separated(&self) -> Result<(), Error> {
        if self.needs_separator {
            return Err(Error::new(
                ErrorImpl::MissingSeparator {
                    remainder: self.remainder().to_string(),
                },
                self.location(),
            ));
        }
        Ok(())
    }
}

fn identifier_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.check_separated()?;
    lexer.push(MK_TOKEN!(
        TokenKind::Identifier,
        matched.clone(),
        lexer.location()
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn int_literal_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.check_separated()?;
    lexer.push(MK_TOKEN!(
        TokenKind::IntLiteral,
        matched.clone(),
        lexer.location()
    ));
    lexer.advance_n(matched.len());
    lexer.needs_separator = true;
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.skip_n(matched);
    lexer.needs_separator = false;
    Ok(())
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.needs_separator = false;
    lexer.push(MK_TOKEN!(
        TokenKind::Operator,
        matched.clone(),
        lexer.location()
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn punctuation_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.needs_separator = false;
    lexer.push(MK_TOKEN!(
        TokenKind::Punctuation,
        matched.clone(),
        lexer.location()
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

/// Converts source text into an ordered sequence of tokens.
///
/// One linear left-to-right scan; fails with a `LexError` when no lexical
/// pattern matches at the current position, or when an integer literal runs
/// straight into another literal or identifier.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for i in 0..lex.patterns.len() {
            let match_here = lex.patterns[i].regex.find(lex.remainder());

            if let Some(found) = match_here {
                if found.start() == 0 {
                    let handler = lex.patterns[i].handler;
                    let regex = lex.patterns[i].regex.clone();
                    handler(&mut lex, &regex)?;
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedInput {
                    remainder: lex.remainder().to_string(),
                },
                lex.location(),
            ));
        }
    }

    Ok(lex.tokens)
}
