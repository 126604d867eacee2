//! Animal menagerie simulation
//!
//! This module implements the animal-simulation interpreter:
//! - [`animal`]: species variants, the animal record, and the substance
//!   state machine (base → Better → Monster)
//! - [`habitat`]: sorted pens, the habitat registry, and the time-advance
//!   sweep
//! - [`command`]: line parser producing [`command::Command`] values
//! - [`engine`]: dispatcher and per-command handlers
//!
//! # Command Stream
//!
//! The input starts with a command count, followed by that many lines. Each
//! line is split on spaces; the first token selects the handler and any
//! unrecognized first token runs the implicit time-advance (`period`)
//! command.
//!
//! # Addressing
//!
//! Animals are addressed positionally within a pen, and a pen is addressed
//! by a (container, species) token pair — except Freedom, which is a single
//! pen addressed without a species token. Positions shift as the pen is
//! re-sorted after every mutation, so they are only valid at the moment of
//! the command.

pub mod animal;
pub mod command;
pub mod engine;
pub mod habitat;
