//! Description loading error types.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur while loading a textual description.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the description failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The description ended before all four header lines were read
    #[error("Description ended before the {field} line")]
    MissingHeader { field: &'static str },

    /// A header line could not be parsed
    #[error("Line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// A transition line is not of the form `(state,symbol)->state`
    #[error("Line {line}: malformed transition '{text}', expected (state,symbol)->state")]
    MalformedTransition { line: usize, text: String },

    /// An identifier cannot be written in the description format
    #[error("Identifier '{identifier}' cannot be written in the description format")]
    Unrenderable { identifier: String },

    /// A well-formed transition names an undeclared state or symbol
    #[error("Line {line}: rejected transition rule")]
    Automaton {
        line: usize,
        #[source]
        source: AutomatonError,
    },
}
