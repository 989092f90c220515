//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, State, Symbol};

/// Builder for constructing automata with a fluent API.
///
/// Transitions are registered in the order they were added, so a later
/// rule for the same `(state, symbol)` pair wins.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    alphabet: Vec<Symbol>,
    states: Vec<State>,
    start: Option<State>,
    accept: Vec<State>,
    transitions: Vec<(State, Symbol, State)>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add symbols to the alphabet.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = impl Into<Symbol>>) -> Self {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add states.
    pub fn states(mut self, states: impl IntoIterator<Item = impl Into<State>>) -> Self {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<State>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Add accept states.
    pub fn accept(mut self, states: impl IntoIterator<Item = impl Into<State>>) -> Self {
        self.accept.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition rule.
    pub fn transition(
        mut self,
        from: impl Into<State>,
        symbol: impl Into<Symbol>,
        to: impl Into<State>,
    ) -> Self {
        self.transitions.push((from.into(), symbol.into(), to.into()));
        self
    }

    /// Add multiple transition rules at once.
    pub fn transitions<F, A, T>(mut self, rules: impl IntoIterator<Item = (F, A, T)>) -> Self
    where
        F: Into<State>,
        A: Into<Symbol>,
        T: Into<State>,
    {
        self.transitions.extend(
            rules
                .into_iter()
                .map(|(from, symbol, to)| (from.into(), symbol.into(), to.into())),
        );
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or a rule is invalid.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let mut automaton = Automaton::new(self.alphabet, self.states, start, self.accept);
        for (from, symbol, to) in self.transitions {
            automaton.add_transition(from, symbol, to)?;
        }

        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AutomatonError;

    #[test]
    fn builder_validates_required_fields() {
        let result = AutomatonBuilder::new().alphabet(["a"]).states(["p"]).build();

        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn builder_allows_no_transitions() {
        let automaton = AutomatonBuilder::new()
            .alphabet(["a"])
            .states(["p"])
            .start("p")
            .accept(["p"])
            .build()
            .unwrap();

        assert_eq!(automaton.transition_count(), 0);
        assert_eq!(automaton.accepts(""), Ok(true));
        assert_eq!(automaton.accepts("a"), Ok(false));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new()
            .alphabet(["0", "1"])
            .states(["S0", "S1"])
            .start("S0")
            .accept(["S1"])
            .transition("S0", "0", "S0")
            .transition("S0", "1", "S1")
            .transitions([("S1", "0", "S0"), ("S1", "1", "S1")])
            .build()
            .unwrap();

        assert_eq!(automaton.transition_count(), 4);
        assert_eq!(automaton.accepts("0101"), Ok(true));
    }

    #[test]
    fn invalid_rule_surfaces_core_error() {
        let result = AutomatonBuilder::new()
            .alphabet(["a"])
            .states(["p"])
            .start("p")
            .transition("p", "b", "p")
            .build();

        assert_eq!(
            result,
            Err(BuildError::Transition(AutomatonError::InvalidTransition {
                from: "p".to_string(),
                symbol: "b".to_string(),
                to: "p".to_string(),
            }))
        );
    }

    #[test]
    fn later_rule_wins() {
        let automaton = AutomatonBuilder::new()
            .alphabet(["a"])
            .states(["p", "q"])
            .start("p")
            .accept(["q"])
            .transition("p", "a", "q")
            .transition("p", "a", "p")
            .build()
            .unwrap();

        assert_eq!(automaton.transition("p", "a"), Some("p"));
    }

    #[test]
    fn builder_does_not_validate_start_or_accept() {
        let automaton = AutomatonBuilder::new()
            .alphabet(["a"])
            .states(["p"])
            .start("ghost")
            .accept(["phantom"])
            .build();

        assert!(automaton.is_ok());
    }
}
