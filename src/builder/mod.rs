//! Builder API for ergonomic automaton construction.
//!
//! The builder and the [`automaton!`](crate::automaton) macro are thin
//! layers over [`Automaton::new`] and [`Automaton::add_transition`]; they
//! add no validation of their own beyond requiring a start state.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::Automaton;

/// Build a complete automaton from a transition function.
///
/// Every `(state, symbol)` pair is passed to `delta`; `None` leaves the pair
/// undefined.
///
/// # Example
///
/// ```
/// use dfa::builder::from_fn;
///
/// // Strings over {a, b} with an even number of a's
/// let dfa = from_fn(["a", "b"], ["even", "odd"], "even", ["even"], |state, symbol| {
///     match (state, symbol) {
///         ("even", "a") => Some("odd"),
///         ("odd", "a") => Some("even"),
///         (s, _) => Some(s),
///     }
/// })
/// .unwrap();
///
/// assert!(dfa.is_complete());
/// assert_eq!(dfa.accepts("abba"), Ok(true));
/// ```
pub fn from_fn<'a, F>(
    alphabet: impl IntoIterator<Item = &'a str>,
    states: impl IntoIterator<Item = &'a str>,
    start: &'a str,
    accept: impl IntoIterator<Item = &'a str>,
    delta: F,
) -> Result<Automaton, BuildError>
where
    F: Fn(&'a str, &'a str) -> Option<&'a str>,
{
    let alphabet: Vec<&str> = alphabet.into_iter().collect();
    let states: Vec<&str> = states.into_iter().collect();

    let mut builder = AutomatonBuilder::new()
        .alphabet(alphabet.iter().copied())
        .states(states.iter().copied())
        .start(start)
        .accept(accept);

    for &state in &states {
        for &symbol in &alphabet {
            if let Some(to) = delta(state, symbol) {
                builder = builder.transition(state, symbol, to);
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_builds_complete_automaton() {
        let dfa = from_fn(["0", "1"], ["S0", "S1"], "S0", ["S1"], |_, symbol| {
            Some(if symbol == "1" { "S1" } else { "S0" })
        })
        .unwrap();

        assert!(dfa.is_complete());
        assert_eq!(dfa.transition_count(), 4);
        assert_eq!(dfa.accepts("0011"), Ok(true));
    }

    #[test]
    fn from_fn_leaves_none_undefined() {
        let dfa = from_fn(["a"], ["p", "q"], "p", ["q"], |state, _| {
            (state == "p").then_some("q")
        })
        .unwrap();

        assert!(!dfa.is_complete());
        assert_eq!(dfa.transition("q", "a"), None);
        assert_eq!(dfa.accepts("aa"), Ok(false));
    }
}
