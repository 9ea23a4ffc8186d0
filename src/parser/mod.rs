//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an expression tree. It handles:
//!
//! - Binary operators organised in explicit precedence levels, parsed by a
//!   single combinator that folds left over each level's operator set
//! - Right-associative assignment with an identifier-only left operand
//! - Prefix `not` / `-`
//! - Conditionals, while loops, blocks, variable bindings, function calls
//!
//! Every production is chosen by one token of lookahead; there is no
//! backtracking and no error recovery - the first malformed token aborts
//! the parse.

pub mod expr;
pub mod parser;
