//! Student/exam/grade record store
//!
//! This module implements the record-store interpreter:
//! - [`record`]: record types and field validation rules
//! - [`store`]: append-only slot arenas with tombstone deletion
//! - [`command`]: token reader and command keywords
//! - [`engine`]: dispatcher and per-command handlers
//! - [`errors`]: input-stream error type
//!
//! # Command Stream
//!
//! Input is a flat sequence of whitespace-delimited tokens. The first token
//! of each logical command is a keyword followed by that command's
//! fixed-arity arguments. `END` stops the loop; an unrecognized keyword is
//! skipped without output, which also swallows the leftover arguments of a
//! command that bailed out before consuming them.
//!
//! # Validation Order
//!
//! Handlers check existence/duplication before id ranges and id ranges
//! before field formats. The order is part of the observable contract: the
//! first failing check's message is the command's entire output.

pub mod command;
pub mod engine;
pub mod errors;
pub mod record;
pub mod store;
