//! Error types for the front end.
//!
//! This module defines the two terminal error kinds of the pipeline:
//!
//! - `LexError` variants raised while tokenizing
//! - `SyntaxError` variants raised while parsing
//!
//! Every error carries the source location it was raised at, plus an
//! optional suggestion used when rendering diagnostics.

pub mod errors;
