//! Interactive read-evaluate loop over an automaton.
//!
//! The shell owns no automaton logic: it reads one candidate per line,
//! asks the automaton for a verdict and reports it. Reader and writer are
//! generic so the loop runs the same against a terminal or in-memory buffers.

use crate::core::{Automaton, Outcome, Run};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Default prompt written before each candidate is read.
pub const DEFAULT_PROMPT: &str = "Enter a string to test (or 'exit' to quit): ";

/// Default input line that ends the session.
pub const DEFAULT_EXIT_SENTINEL: &str = "exit";

/// Shell configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Written before each read
    pub prompt: String,

    /// Line that terminates the session
    pub exit_sentinel: String,

    /// Print the visited path after each verdict
    pub trace: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_sentinel: DEFAULT_EXIT_SENTINEL.to_string(),
            trace: false,
        }
    }
}

/// Verdict counts for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub errors: usize,
}

/// Read-evaluate loop bound to one automaton.
///
/// # Example
///
/// ```rust
/// use dfa::core::Automaton;
/// use dfa::shell::Shell;
///
/// let mut dfa = Automaton::new(["a"], ["p"], "p", ["p"]);
/// dfa.add_transition("p", "a", "p").unwrap();
///
/// let input = "aa\nb\nexit\n".as_bytes();
/// let mut output = Vec::new();
/// let summary = Shell::new(&dfa, input, &mut output).run().unwrap();
///
/// assert_eq!(summary.accepted, 1);
/// assert_eq!(summary.errors, 1);
/// ```
pub struct Shell<'a, R, W> {
    automaton: &'a Automaton,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(automaton: &'a Automaton, input: R, output: W) -> Self {
        Self {
            automaton,
            config: ShellConfig::default(),
            input,
            output,
        }
    }

    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    /// Run until the exit sentinel or end of input.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let candidate = strip_line_ending(&line);
            if candidate == self.config.exit_sentinel {
                break;
            }

            self.evaluate(candidate, &mut summary)?;
        }

        debug!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            errors = summary.errors,
            "session finished"
        );
        Ok(summary)
    }

    fn evaluate(&mut self, candidate: &str, summary: &mut SessionSummary) -> io::Result<()> {
        let result = if self.config.trace {
            self.automaton
                .run(candidate)
                .map(|run| (run.is_accepted(), Some(run)))
        } else {
            self.automaton
                .accepts(candidate)
                .map(|accepted| (accepted, None))
        };

        match result {
            Ok((accepted, run)) => {
                if accepted {
                    summary.accepted += 1;
                    writeln!(self.output, "String accepted.")?;
                } else {
                    summary.rejected += 1;
                    writeln!(self.output, "String rejected.")?;
                }
                if let Some(run) = run {
                    write_trace(&mut self.output, &run)?;
                }
            }
            Err(err) => {
                summary.errors += 1;
                debug!(%err, candidate, "evaluation failed");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(())
    }

    /// Consume the shell, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn write_trace(out: &mut impl Write, run: &Run) -> io::Result<()> {
    writeln!(out, "  path: {}", run.path().join(" -> "))?;
    if let Outcome::Undefined {
        state,
        symbol,
        position,
    } = run.outcome()
    {
        writeln!(
            out,
            "  no transition from {state} on '{symbol}' at position {position}"
        )?;
    }
    Ok(())
}
