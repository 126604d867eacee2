//! Input-stream error type for the record store
//!
//! Domain validation failures (duplicate id, bad name, absent record) are
//! transcript lines, not errors. [`InputError`] covers the stream itself:
//! a command that names more arguments than the input provides, or a token
//! that should be numeric and is not. These abort the run with a
//! diagnostic; everything already reported stays reported.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The token stream ended in the middle of a command's argument list.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// A token that must be an integer failed to parse.
    #[error("expected a number for {expected}, got '{token}'")]
    InvalidNumber {
        expected: &'static str,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;
