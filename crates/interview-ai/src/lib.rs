//! Core library for the interview scoring engine.
//!
//! The engine turns an upstream AI judge's semi-reliable structured judgment
//! of an interview answer into a single defensible score, corrects known
//! failure modes of the judge with independent textual heuristics, and
//! aggregates per-question scores into a candidate-facing report. Everything
//! here is pure computation: no I/O, no shared mutable state, safe to call
//! from any number of concurrent tasks.

pub mod error;
pub mod interview;
