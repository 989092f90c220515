//! The deterministic finite automaton value.

use super::error::AutomatonError;
use super::run::{Outcome, Run, Step};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Opaque state identifier.
pub type State = String;

/// Alphabet symbol. Evaluation only ever matches single-character symbols.
pub type Symbol = String;

/// A deterministic finite automaton.
///
/// The alphabet, states, start state and accept states are fixed at
/// construction. Transitions are registered afterwards with
/// [`add_transition`](Self::add_transition), and the automaton can then be
/// queried any number of times with [`accepts`](Self::accepts).
///
/// The transition function is partial: a `(state, symbol)` pair without an
/// entry is undefined, and reading it rejects the input.
///
/// # Example
///
/// ```rust
/// use dfa::core::Automaton;
///
/// // Binary strings ending in "1"
/// let mut dfa = Automaton::new(["0", "1"], ["S0", "S1"], "S0", ["S1"]);
/// dfa.add_transition("S0", "0", "S0").unwrap();
/// dfa.add_transition("S0", "1", "S1").unwrap();
/// dfa.add_transition("S1", "0", "S0").unwrap();
/// dfa.add_transition("S1", "1", "S1").unwrap();
///
/// assert_eq!(dfa.accepts("101"), Ok(true));
/// assert_eq!(dfa.accepts("100"), Ok(false));
/// assert!(dfa.accepts("12").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    alphabet: HashSet<Symbol>,
    states: HashSet<State>,
    start: State,
    accept: HashSet<State>,
    transitions: HashMap<State, HashMap<Symbol, State>>,
}

/// Where the left-to-right fold stopped.
enum Halt<'a> {
    Consumed(&'a str),
    Undefined {
        state: &'a str,
        symbol: char,
        position: usize,
    },
}

impl Automaton {
    /// Create an automaton with an empty transition table.
    ///
    /// Neither the start state nor the accept states are checked against
    /// `states`. An accept state that is not a declared state can never be
    /// reached, since transitions only ever target declared states.
    pub fn new(
        alphabet: impl IntoIterator<Item = impl Into<Symbol>>,
        states: impl IntoIterator<Item = impl Into<State>>,
        start: impl Into<State>,
        accept: impl IntoIterator<Item = impl Into<State>>,
    ) -> Self {
        Self {
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            states: states.into_iter().map(Into::into).collect(),
            start: start.into(),
            accept: accept.into_iter().map(Into::into).collect(),
            transitions: HashMap::new(),
        }
    }

    /// Register `(from, symbol) -> to`, replacing any earlier target for the
    /// same pair.
    ///
    /// Fails with [`AutomatonError::InvalidTransition`] if `from`, `to` or
    /// `symbol` is undeclared. The table is left untouched on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa::core::{Automaton, AutomatonError};
    ///
    /// let mut dfa = Automaton::new(["a"], ["p", "q"], "p", ["q"]);
    /// assert!(dfa.add_transition("p", "a", "q").is_ok());
    ///
    /// let err = dfa.add_transition("p", "b", "q").unwrap_err();
    /// assert!(matches!(err, AutomatonError::InvalidTransition { .. }));
    /// ```
    pub fn add_transition(
        &mut self,
        from: impl Into<State>,
        symbol: impl Into<Symbol>,
        to: impl Into<State>,
    ) -> Result<(), AutomatonError> {
        let (from, symbol, to) = (from.into(), symbol.into(), to.into());

        if !self.states.contains(&from)
            || !self.states.contains(&to)
            || !self.alphabet.contains(&symbol)
        {
            return Err(AutomatonError::InvalidTransition { from, symbol, to });
        }

        debug!(%from, %symbol, %to, "adding transition");
        let targets = self.transitions.entry(from).or_default();
        if let Some(previous) = targets.get(&symbol).filter(|p| **p != to) {
            warn!(%symbol, %previous, %to, "overwriting existing transition");
        }
        targets.insert(symbol, to);

        Ok(())
    }

    /// Decide whether `input` is accepted.
    ///
    /// Input is consumed one character at a time from the start state.
    /// A character outside the alphabet aborts evaluation with
    /// [`AutomatonError::InvalidInputSymbol`]. An undefined transition
    /// rejects immediately without looking at the rest of the input.
    pub fn accepts(&self, input: &str) -> Result<bool, AutomatonError> {
        match self.evaluate(input, |_, _, _| {})? {
            Halt::Consumed(state) => Ok(self.accept.contains(state)),
            Halt::Undefined { .. } => Ok(false),
        }
    }

    /// Evaluate `input` like [`accepts`](Self::accepts), recording every
    /// step taken.
    pub fn run(&self, input: &str) -> Result<Run, AutomatonError> {
        let mut steps = Vec::new();
        let halt = self.evaluate(input, |from, symbol, to| {
            steps.push(Step {
                from: from.to_string(),
                symbol: symbol.to_string(),
                to: to.to_string(),
            })
        })?;

        let outcome = match halt {
            Halt::Consumed(state) if self.accept.contains(state) => Outcome::Accepted,
            Halt::Consumed(_) => Outcome::Rejected,
            Halt::Undefined {
                state,
                symbol,
                position,
            } => Outcome::Undefined {
                state: state.to_string(),
                symbol: symbol.to_string(),
                position,
            },
        };

        Ok(Run::new(self.start.clone(), steps, outcome))
    }

    fn evaluate<'a>(
        &'a self,
        input: &str,
        mut observe: impl FnMut(&'a str, char, &'a str),
    ) -> Result<Halt<'a>, AutomatonError> {
        let mut current: &'a str = &self.start;
        let mut buf = [0u8; 4];

        for (position, c) in input.chars().enumerate() {
            let symbol = &*c.encode_utf8(&mut buf);
            if !self.alphabet.contains(symbol) {
                return Err(AutomatonError::InvalidInputSymbol {
                    symbol: c,
                    position,
                });
            }

            let Some(next) = self.transition(current, symbol) else {
                trace!(state = current, symbol, position, "undefined transition");
                return Ok(Halt::Undefined {
                    state: current,
                    symbol: c,
                    position,
                });
            };

            trace!(from = current, symbol, to = next, "step");
            observe(current, c, next);
            current = next;
        }

        Ok(Halt::Consumed(current))
    }

    pub fn alphabet(&self) -> &HashSet<Symbol> {
        &self.alphabet
    }

    pub fn states(&self) -> &HashSet<State> {
        &self.states
    }

    pub fn start_state(&self) -> &str {
        &self.start
    }

    pub fn accept_states(&self) -> &HashSet<State> {
        &self.accept
    }

    /// Target of `(from, symbol)`, or `None` if undefined.
    pub fn transition(&self, from: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .get(from)
            .and_then(|targets| targets.get(symbol))
            .map(String::as_str)
    }

    /// All registered transitions as `(from, symbol, to)`, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.transitions.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(symbol, to)| (from.as_str(), symbol.as_str(), to.as_str()))
        })
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    /// Whether every declared `(state, symbol)` pair has a transition.
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|state| {
            self.alphabet
                .iter()
                .all(|symbol| self.transition(state, symbol).is_some())
        })
    }
}
