//! DFA: deterministic finite automata with validated construction
//!
//! An automaton is declared once with its alphabet, states, start state and
//! accept states, populated with transitions, and then queried any number of
//! times. Evaluation is a pure function of the automaton and the input.
//!
//! # Core Concepts
//!
//! - **Automaton**: fixed sets plus a partial transition table
//! - **Transitions**: validated against the declared sets when registered
//! - **Evaluation**: `accepts` decides, `run` also records the path taken
//!
//! Reading descriptions, interactive prompting and persistence live in
//! their own modules around the core.
//!
//! # Example
//!
//! ```rust
//! use dfa::core::{Automaton, AutomatonError};
//!
//! let mut dfa = Automaton::new(["0", "1"], ["S0", "S1"], "S0", ["S1"]);
//! dfa.add_transition("S0", "0", "S0")?;
//! dfa.add_transition("S0", "1", "S1")?;
//! dfa.add_transition("S1", "1", "S1")?;
//!
//! assert_eq!(dfa.accepts("011"), Ok(true));
//! // (S1, 0) is undefined: a rejection, not an error
//! assert_eq!(dfa.accepts("10"), Ok(false));
//! // '2' is not in the alphabet: an error
//! assert!(matches!(
//!     dfa.accepts("12"),
//!     Err(AutomatonError::InvalidInputSymbol { symbol: '2', position: 1 })
//! ));
//! # Ok::<(), AutomatonError>(())
//! ```

pub mod builder;
pub mod core;
pub mod loader;
pub mod shell;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{Automaton, AutomatonError, Outcome, Run};
pub use crate::loader::LoadError;
