//! Errors raised by the automaton core.

use thiserror::Error;

/// Errors that can occur when populating or evaluating an [`Automaton`].
///
/// Both kinds are fatal to the single call that raised them. An undefined
/// transition during evaluation is *not* an error; it rejects the input.
///
/// [`Automaton`]: crate::core::Automaton
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Invalid transition ({from}, {symbol}) -> {to}: states and symbol must be declared")]
    InvalidTransition {
        from: String,
        symbol: String,
        to: String,
    },

    #[error("Input contains symbol '{symbol}' at position {position} which is not in the alphabet")]
    InvalidInputSymbol { symbol: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_the_rule() {
        let err = AutomatonError::InvalidTransition {
            from: "S0".to_string(),
            symbol: "2".to_string(),
            to: "S1".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid transition (S0, 2) -> S1: states and symbol must be declared"
        );
    }

    #[test]
    fn invalid_symbol_message_names_position() {
        let err = AutomatonError::InvalidInputSymbol {
            symbol: 'x',
            position: 3,
        };

        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("position 3"));
    }
}
