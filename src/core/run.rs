//! Recorded evaluation of a single input.
//!
//! A [`Run`] is the trace produced by [`Automaton::run`]: the start state,
//! every transition taken in order, and how the evaluation ended.
//!
//! [`Automaton::run`]: crate::core::Automaton::run

use super::automaton::{State, Symbol};
use serde::{Deserialize, Serialize};

/// A single transition taken while consuming input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state the symbol was read in
    pub from: State,
    /// The consumed symbol
    pub symbol: Symbol,
    /// The state reached after reading the symbol
    pub to: State,
}

/// How an evaluation ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All input consumed, ending in an accept state
    Accepted,

    /// All input consumed, ending in a non-accept state
    Rejected,

    /// No transition for `(state, symbol)`; the remaining input was skipped
    Undefined {
        state: State,
        symbol: Symbol,
        position: usize,
    },
}

/// Ordered trace of one evaluation.
///
/// # Example
///
/// ```rust
/// use dfa::core::{Automaton, Outcome};
///
/// let mut dfa = Automaton::new(["a"], ["q0", "q1"], "q0", ["q1"]);
/// dfa.add_transition("q0", "a", "q1").unwrap();
///
/// let run = dfa.run("a").unwrap();
/// assert_eq!(run.outcome(), &Outcome::Accepted);
/// assert_eq!(run.path(), vec!["q0", "q1"]);
///
/// let run = dfa.run("aa").unwrap();
/// assert!(matches!(run.outcome(), Outcome::Undefined { position: 1, .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    start: State,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl Run {
    pub(crate) fn new(start: State, steps: Vec<Step>, outcome: Outcome) -> Self {
        Self {
            start,
            steps,
            outcome,
        }
    }

    /// The state the evaluation started in.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Transitions taken, in input order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted)
    }

    /// The last state reached.
    ///
    /// For an undefined transition this is the state evaluation got stuck in.
    pub fn last_state(&self) -> &str {
        self.steps.last().map_or(self.start.as_str(), |s| s.to.as_str())
    }

    /// States traversed: the start state, then the target of each step.
    pub fn path(&self) -> Vec<&str> {
        std::iter::once(self.start.as_str())
            .chain(self.steps.iter().map(|s| s.to.as_str()))
            .collect()
    }
}
