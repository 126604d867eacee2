//! # Introduction
//!
//! edulab bundles two small, independent command interpreters that share one
//! shape: read a command keyword, dispatch to a handler, validate arguments,
//! mutate an in-memory store, and report a single result line.
//!
//! ## Programs
//!
//! ```text
//! gradebook:  input.txt → token stream → dispatcher → record store → output.txt
//! menagerie:  stdin     → line stream  → dispatcher → habitats     → stdout
//! ```
//!
//! 1. [`gradebook`] — a record store for students, exams, and grades.
//!    Records live in append-only slot arenas; deletion tombstones a slot in
//!    place so that ids and slots are never reused.
//! 2. [`menagerie`] — a simulation of animals in typed habitats. Animals are
//!    tagged [`menagerie::animal::Species`] variants with explicit
//!    upgrade/downgrade transitions instead of an inheritance hierarchy.
//! 3. [`transcript`] — the output-line collector both engines report into;
//!    the binaries decide where the collected lines go.
//!
//! ## Error model
//!
//! Domain-level validation failures (bad id, bad name, animal not found) are
//! reported as transcript lines and never abort the run. Stream-level
//! failures (unreadable input, truncated argument list, malformed command
//! count) are `Result` errors surfaced by the binaries.

pub mod gradebook;
pub mod menagerie;
pub mod transcript;
