//! Property-based tests for automaton construction and evaluation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use dfa::core::{Automaton, AutomatonError, Outcome};
use proptest::prelude::*;

const STATES: [&str; 4] = ["q0", "q1", "q2", "q3"];

prop_compose! {
    // Automaton over {a, b} with a random, possibly partial, transition table.
    fn arbitrary_automaton()(
        accept in prop::collection::vec(any::<bool>(), 4),
        table in prop::collection::vec(prop::option::of(0..4usize), 8),
    ) -> Automaton {
        let accept: Vec<&str> = STATES
            .iter()
            .zip(&accept)
            .filter(|(_, accepting)| **accepting)
            .map(|(state, _)| *state)
            .collect();
        let mut dfa = Automaton::new(["a", "b"], STATES, "q0", accept);

        for (index, target) in table.iter().enumerate() {
            if let Some(target) = target {
                let from = STATES[index / 2];
                let symbol = if index % 2 == 0 { "a" } else { "b" };
                dfa.add_transition(from, symbol, STATES[*target]).unwrap();
            }
        }
        dfa
    }
}

fn word() -> impl Strategy<Value = String> {
    "[ab]{0,12}"
}

proptest! {
    #[test]
    fn empty_input_matches_start_acceptance(dfa in arbitrary_automaton()) {
        let expected = dfa.accept_states().contains(dfa.start_state());
        prop_assert_eq!(dfa.accepts(""), Ok(expected));
    }

    #[test]
    fn foreign_symbol_anywhere_is_an_error(
        dfa in arbitrary_automaton(),
        prefix in "[a]{0,6}",
        foreign in "[c-z0-9]",
        suffix in "[ab]{0,6}",
    ) {
        // A prefix of 'a's reaches the foreign symbol only if no transition is
        // undefined along the way, so use a complete automaton.
        let mut complete = dfa.clone();
        for state in STATES {
            for symbol in ["a", "b"] {
                if complete.transition(state, symbol).is_none() {
                    complete.add_transition(state, symbol, state).unwrap();
                }
            }
        }
        let input = format!("{prefix}{foreign}{suffix}");
        let position = prefix.chars().count();

        let is_invalid_symbol_error = matches!(
            complete.accepts(&input),
            Err(AutomatonError::InvalidInputSymbol { position: p, .. }) if p == position
        );
        prop_assert!(is_invalid_symbol_error);
    }

    #[test]
    fn accepts_agrees_with_run(dfa in arbitrary_automaton(), input in word()) {
        let run = dfa.run(&input).unwrap();
        prop_assert_eq!(dfa.accepts(&input), Ok(run.is_accepted()));
    }

    #[test]
    fn run_path_is_connected(dfa in arbitrary_automaton(), input in word()) {
        let run = dfa.run(&input).unwrap();
        let path = run.path();

        prop_assert_eq!(path[0], "q0");
        for (i, step) in run.steps().iter().enumerate() {
            prop_assert_eq!(step.from.as_str(), path[i]);
            prop_assert_eq!(step.to.as_str(), path[i + 1]);
            prop_assert_eq!(dfa.transition(&step.from, &step.symbol), Some(step.to.as_str()));
        }
    }

    #[test]
    fn undefined_outcome_means_missing_transition(dfa in arbitrary_automaton(), input in word()) {
        let run = dfa.run(&input).unwrap();
        if let Outcome::Undefined { state, symbol, position } = run.outcome() {
            prop_assert_eq!(dfa.transition(state, symbol), None);
            prop_assert_eq!(run.steps().len(), *position);
            prop_assert_eq!(dfa.accepts(&input), Ok(false));
        } else {
            prop_assert_eq!(run.steps().len(), input.chars().count());
        }
    }

    #[test]
    fn repeated_add_transition_is_idempotent(
        dfa in arbitrary_automaton(),
        from in 0..4usize,
        to in 0..4usize,
        symbol in prop::sample::select(vec!["a", "b"]),
    ) {
        let mut once = dfa.clone();
        once.add_transition(STATES[from], symbol, STATES[to]).unwrap();
        let mut twice = once.clone();
        twice.add_transition(STATES[from], symbol, STATES[to]).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn later_transition_overwrites_earlier(
        dfa in arbitrary_automaton(),
        from in 0..4usize,
        first in 0..4usize,
        second in 0..4usize,
    ) {
        let mut dfa = dfa;
        dfa.add_transition(STATES[from], "a", STATES[first]).unwrap();
        dfa.add_transition(STATES[from], "a", STATES[second]).unwrap();

        prop_assert_eq!(dfa.transition(STATES[from], "a"), Some(STATES[second]));
    }

    #[test]
    fn failed_add_transition_leaves_table_unchanged(
        dfa in arbitrary_automaton(),
        from in "[a-z]{1,3}",
        symbol in "[c-z]",
    ) {
        let mut mutated = dfa.clone();

        prop_assert!(mutated.add_transition(from.as_str(), "a", "q0").is_err());
        prop_assert!(mutated.add_transition("q0", "a", from.as_str()).is_err());
        prop_assert!(mutated.add_transition("q0", symbol.as_str(), "q0").is_err());
        prop_assert_eq!(mutated, dfa);
    }

    #[test]
    fn evaluation_does_not_mutate(dfa in arbitrary_automaton(), input in "[abc]{0,8}") {
        let before = dfa.clone();
        let _ = dfa.accepts(&input);
        let _ = dfa.run(&input);
        prop_assert_eq!(dfa, before);
    }
}
