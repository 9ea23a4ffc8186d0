//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source code into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Identifiers (keywords included), integer literals, operators and
//!   punctuation
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
