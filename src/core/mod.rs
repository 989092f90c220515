//! Core automaton types and logic.
//!
//! This module contains the automaton itself:
//! - The `Automaton` value with its fixed sets and transition table
//! - Validation errors for transition registration and evaluation
//! - Recorded runs of a single evaluation
//!
//! Evaluation is pure: querying an automaton never mutates it.

mod automaton;
mod error;
mod run;

pub use automaton::{Automaton, State, Symbol};
pub use error::AutomatonError;
pub use run::{Outcome, Run, Step};
