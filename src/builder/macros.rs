//! Macros for ergonomic automaton construction.

/// Build an automaton from a literal description.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<Automaton, BuildError>`.
///
/// # Example
///
/// ```
/// use dfa::automaton;
///
/// let dfa = automaton! {
///     alphabet: ["0", "1"],
///     states: ["even", "odd"],
///     start: "even",
///     accept: ["even"],
///     transitions: {
///         ("even", "0") => "even",
///         ("even", "1") => "odd",
///         ("odd", "0") => "odd",
///         ("odd", "1") => "even",
///     }
/// }
/// .unwrap();
///
/// assert_eq!(dfa.accepts("1001"), Ok(true));
/// ```
#[macro_export]
macro_rules! automaton {
    (
        alphabet: [$($symbol:expr),* $(,)?],
        states: [$($state:expr),* $(,)?],
        start: $start:expr,
        accept: [$($accept:expr),* $(,)?],
        transitions: {
            $(($from:expr, $on:expr) => $to:expr),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.alphabet([$symbol]))*
            $(.states([$state]))*
            .start($start)
            $(.accept([$accept]))*
            $(.transition($from, $on, $to))*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;

    #[test]
    fn automaton_macro_builds() {
        let dfa = automaton! {
            alphabet: ["a", "b"],
            states: ["p", "q"],
            start: "p",
            accept: ["q"],
            transitions: {
                ("p", "a") => "q",
                ("q", "b") => "p",
            }
        }
        .unwrap();

        assert_eq!(dfa.accepts("a"), Ok(true));
        assert_eq!(dfa.accepts("ab"), Ok(false));
        assert_eq!(dfa.accepts("aba"), Ok(true));
    }

    #[test]
    fn automaton_macro_allows_empty_sets() {
        let dfa = automaton! {
            alphabet: ["a"],
            states: ["p"],
            start: "p",
            accept: [],
            transitions: {}
        }
        .unwrap();

        assert!(dfa.accept_states().is_empty());
        assert_eq!(dfa.accepts(""), Ok(false));
    }

    #[test]
    fn automaton_macro_propagates_invalid_rules() {
        let result = automaton! {
            alphabet: ["a"],
            states: ["p"],
            start: "p",
            accept: ["p"],
            transitions: {
                ("p", "a") => "missing",
            }
        };

        assert!(matches!(result, Err(BuildError::Transition(_))));
    }
}
