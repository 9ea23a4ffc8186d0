use std::fmt::Display;

use thiserror::Error;

use crate::SourceLocation;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    location: SourceLocation,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: SourceLocation) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &SourceLocation {
        &self.location
    }

    /// The error's kind: `"LexError"` for tokenizer failures,
    /// `"SyntaxError"` for parser failures.
    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => "LexError",
            ErrorImpl::MissingSeparator { .. } => "LexError",
            ErrorImpl::ExpectedToken { .. } => "SyntaxError",
            ErrorImpl::ExpectedExpression { .. } => "SyntaxError",
            ErrorImpl::InvalidAssignmentTarget => "SyntaxError",
            ErrorImpl::TrailingInput { .. } => "SyntaxError",
            ErrorImpl::IntOutOfRange { .. } => "SyntaxError",
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => ErrorTip::None,
            ErrorImpl::MissingSeparator { remainder } => ErrorTip::Suggestion(format!(
                "insert whitespace before `{}`",
                remainder.chars().take(10).collect::<String>()
            )),
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found `{}`", expected, found))
            }
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression, did you mean a literal or a variable?",
                found
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only an identifier can appear on the left of `=`",
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "unexpected `{}` after the end of the expression",
                token
            )),
            ErrorImpl::IntOutOfRange { token } => ErrorTip::Suggestion(format!(
                "`{}` does not fit in a 64-bit integer",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("could not tokenize {remainder:?}")]
    UnrecognisedInput { remainder: String },
    #[error("literal must be separated from {remainder:?}")]
    MissingSeparator { remainder: String },
    #[error("expected {expected}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("expected \"(\", an integer literal or an identifier, found {found:?}")]
    ExpectedExpression { found: String },
    #[error("left side of assignment must be an identifier")]
    InvalidAssignmentTarget,
    #[error("trailing input after expression: {token:?}")]
    TrailingInput { token: String },
    #[error("integer literal out of range: {token:?}")]
    IntOutOfRange { token: String },
}
