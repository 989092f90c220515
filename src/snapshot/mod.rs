//! Snapshots of populated automata.
//!
//! A snapshot is a versioned, serializable copy of an automaton's sets and
//! transition table, so a loaded automaton can be persisted and restored
//! without re-reading its original description.

use crate::core::{Automaton, State, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One registered transition.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    pub from: State,
    pub symbol: Symbol,
    pub to: State,
}

/// Sorted, serializable form of an automaton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub alphabet: Vec<Symbol>,
    pub states: Vec<State>,
    pub start: State,
    pub accept: Vec<State>,
    pub transitions: Vec<Rule>,
}

impl From<&Automaton> for Description {
    fn from(automaton: &Automaton) -> Self {
        let sorted = |set: &std::collections::HashSet<String>| {
            let mut items: Vec<String> = set.iter().cloned().collect();
            items.sort_unstable();
            items
        };

        let mut transitions: Vec<Rule> = automaton
            .transitions()
            .map(|(from, symbol, to)| Rule {
                from: from.to_string(),
                symbol: symbol.to_string(),
                to: to.to_string(),
            })
            .collect();
        transitions.sort_unstable();

        Self {
            alphabet: sorted(automaton.alphabet()),
            states: sorted(automaton.states()),
            start: automaton.start_state().to_string(),
            accept: sorted(automaton.accept_states()),
            transitions,
        }
    }
}

/// Serializable snapshot of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa::core::Automaton;
/// use dfa::snapshot::Snapshot;
///
/// let mut dfa = Automaton::new(["a"], ["p", "q"], "p", ["q"]);
/// dfa.add_transition("p", "a", "q").unwrap();
///
/// let json = Snapshot::capture(&dfa).to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored, dfa);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was created
    pub created_at: DateTime<Utc>,

    /// The captured automaton
    pub automaton: Description,
}

impl Snapshot {
    /// Capture the current sets and transition table.
    pub fn capture(automaton: &Automaton) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            automaton: Description::from(automaton),
        }
    }

    /// Rebuild the automaton, registering every transition again.
    ///
    /// A snapshot whose transitions name undeclared states or symbols fails
    /// with [`SnapshotError::Invalid`].
    pub fn restore(&self) -> Result<Automaton, SnapshotError> {
        self.check_version()?;

        let description = &self.automaton;
        let mut automaton = Automaton::new(
            description.alphabet.iter().cloned(),
            description.states.iter().cloned(),
            description.start.clone(),
            description.accept.iter().cloned(),
        );
        for rule in &description.transitions {
            automaton.add_transition(rule.from.clone(), rule.symbol.clone(), rule.to.clone())?;
        }

        debug!(id = %self.id, transitions = automaton.transition_count(), "restored snapshot");
        Ok(automaton)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    /// Write the snapshot as JSON, replacing `path` atomically.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let json = self.to_json()?;

        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        fs::write(&temp, json)?;
        fs::rename(&temp, path)?;

        debug!(id = %self.id, path = %path.display(), "saved snapshot");
        Ok(())
    }

    /// Read a JSON snapshot written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
