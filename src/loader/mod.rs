//! Loading automata from their textual description.
//!
//! A description is four header lines followed by one transition per line:
//!
//! ```text
//! {0,1}
//! {S0,S1}
//! S0
//! {S1}
//! (S0,0)->S0
//! (S0,1)->S1
//! (S1,0)->S0
//! (S1,1)->S1
//! ```
//!
//! The headers are, in order, the alphabet, the states, the start state and
//! the accept states. Set elements are trimmed and empty elements dropped,
//! so `{}` is the empty set. Blank lines and `#` comments are allowed among
//! the transitions. Loading stops at the first malformed or invalid rule.

use crate::core::Automaton;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

pub mod error;

pub use error::LoadError;

/// Parse a description held in memory.
///
/// # Example
///
/// ```rust
/// use dfa::loader::parse_description;
///
/// let dfa = parse_description("{a,b}\n{p,q}\np\n{q}\n(p,a)->q\n(q,b)->p\n").unwrap();
/// assert_eq!(dfa.accepts("aba"), Ok(true));
/// ```
pub fn parse_description(text: &str) -> Result<Automaton, LoadError> {
    load_from_reader(text.as_bytes())
}

/// Load a description from a file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Automaton, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading automaton description");
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Load a description from any buffered reader.
pub fn load_from_reader(reader: impl BufRead) -> Result<Automaton, LoadError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|text| (index + 1, text)));

    let mut header = |field: &'static str| -> Result<(usize, String), LoadError> {
        lines
            .next()
            .transpose()?
            .ok_or(LoadError::MissingHeader { field })
    };

    let (line, text) = header("alphabet")?;
    let alphabet = parse_set(line, &text, "alphabet")?;
    let (line, text) = header("states")?;
    let states = parse_set(line, &text, "states")?;
    let (line, text) = header("start state")?;
    let start = text.trim().to_string();
    if start.is_empty() {
        return Err(LoadError::MalformedHeader {
            line,
            reason: "start state is empty".to_string(),
        });
    }
    let (line, text) = header("accept states")?;
    let accept = parse_set(line, &text, "accept states")?;

    debug!(
        symbols = alphabet.len(),
        states = states.len(),
        %start,
        "parsed description header"
    );
    let mut automaton = Automaton::new(alphabet, states, start, accept);

    for entry in lines {
        let (line, text) = entry?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (from, symbol, to) =
            parse_transition(trimmed).ok_or_else(|| LoadError::MalformedTransition {
                line,
                text: trimmed.to_string(),
            })?;
        automaton
            .add_transition(from, symbol, to)
            .map_err(|source| LoadError::Automaton { line, source })?;
    }

    info!(
        transitions = automaton.transition_count(),
        "loaded automaton description"
    );
    Ok(automaton)
}

/// Render an automaton in the description format.
///
/// Sets and transitions are sorted, so the output is stable and parses back
/// into an equal automaton. Identifiers the format cannot carry (empty,
/// padded with whitespace, or containing `,` `{` `}` `(` `)` `->` or a line
/// break) fail with [`LoadError::Unrenderable`].
pub fn render(automaton: &Automaton) -> Result<String, LoadError> {
    let mut out = String::new();
    out.push_str(&render_set(automaton.alphabet().iter())?);
    out.push_str(&render_set(automaton.states().iter())?);
    out.push_str(renderable(automaton.start_state())?);
    out.push('\n');
    out.push_str(&render_set(automaton.accept_states().iter())?);

    let mut rules: Vec<_> = automaton.transitions().collect();
    rules.sort_unstable();
    for (from, symbol, to) in rules {
        let (from, symbol, to) = (renderable(from)?, renderable(symbol)?, renderable(to)?);
        out.push_str(&format!("({from},{symbol})->{to}\n"));
    }
    Ok(out)
}

fn render_set<'a>(items: impl Iterator<Item = &'a String>) -> Result<String, LoadError> {
    let mut items = items
        .map(|item| renderable(item))
        .collect::<Result<Vec<&str>, _>>()?;
    items.sort_unstable();
    Ok(format!("{{{}}}\n", items.join(",")))
}

fn renderable(identifier: &str) -> Result<&str, LoadError> {
    let expressible = !identifier.is_empty()
        && identifier.trim() == identifier
        && !identifier.contains("->")
        && !identifier.contains(|c| matches!(c, ',' | '{' | '}' | '(' | ')' | '\n' | '\r'));

    if expressible {
        Ok(identifier)
    } else {
        Err(LoadError::Unrenderable {
            identifier: identifier.to_string(),
        })
    }
}

fn parse_set(line: usize, text: &str, field: &str) -> Result<Vec<String>, LoadError> {
    let inner = text
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| LoadError::MalformedHeader {
            line,
            reason: format!("{field} must be a set like {{a,b}}, found '{}'", text.trim()),
        })?;

    Ok(inner
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect())
}

fn parse_transition(text: &str) -> Option<(&str, &str, &str)> {
    let (source, to) = text.split_once("->")?;
    let pair = source.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (from, symbol) = pair.split_once(',')?;
    let (from, symbol, to) = (from.trim(), symbol.trim(), to.trim());

    if from.is_empty() || symbol.is_empty() || to.is_empty() {
        return None;
    }
    if symbol.contains(',') || to.contains("->") {
        return None;
    }
    Some((from, symbol, to))
}
