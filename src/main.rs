//! DFA CLI - test strings against an automaton description
//!
//! Loads a description file (or a JSON snapshot), then either evaluates the
//! strings given with `--input` or starts an interactive session that runs
//! until the exit word or end of input.

use anyhow::{bail, Context, Result};
use clap::Parser;
use dfa::loader::{self, LoadError};
use dfa::shell::{Shell, ShellConfig, DEFAULT_EXIT_SENTINEL, DEFAULT_PROMPT};
use dfa::snapshot::Snapshot;
use dfa::Automaton;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// DFA CLI application
#[derive(Parser)]
#[command(name = "dfa")]
#[command(about = "Test strings against a deterministic finite automaton", long_about = None)]
#[command(version)]
struct Cli {
    /// Description file; prompted for when omitted
    #[arg(env = "DFA_DESCRIPTION")]
    description: Option<PathBuf>,

    /// Read the description as a JSON snapshot
    #[arg(long)]
    snapshot: bool,

    /// Evaluate these strings and exit instead of starting a session
    #[arg(short, long = "input", value_name = "STRING")]
    inputs: Vec<String>,

    /// Print the path taken after each verdict
    #[arg(long)]
    trace: bool,

    /// Input line that ends the interactive session
    #[arg(long, default_value = DEFAULT_EXIT_SENTINEL)]
    exit_word: String,

    /// Write a JSON snapshot of the loaded automaton
    #[arg(long, value_name = "PATH")]
    save_snapshot: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let path = match &cli.description {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };
    let automaton = load(&path, cli.snapshot)?;

    if let Some(target) = &cli.save_snapshot {
        Snapshot::capture(&automaton)
            .save(target)
            .with_context(|| format!("Failed to write snapshot to {}", target.display()))?;
    }

    if !cli.inputs.is_empty() {
        return evaluate_inputs(&automaton, &cli.inputs, cli.trace);
    }

    let config = ShellConfig {
        prompt: DEFAULT_PROMPT.to_string(),
        exit_sentinel: cli.exit_word,
        trace: cli.trace,
    };
    let stdin = io::stdin();
    Shell::new(&automaton, stdin.lock(), io::stdout().lock())
        .with_config(config)
        .run()
        .context("Interactive session failed")?;

    Ok(ExitCode::SUCCESS)
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Please provide a DFA description file path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read description path")?;

    let path = line.trim();
    if path.is_empty() {
        bail!("No description file path given");
    }
    Ok(PathBuf::from(path))
}

fn load(path: &Path, snapshot: bool) -> Result<Automaton> {
    if snapshot {
        let automaton = Snapshot::load(path)
            .and_then(|snapshot| snapshot.restore())
            .with_context(|| format!("Invalid DFA snapshot {}", path.display()))?;
        return Ok(automaton);
    }

    loader::load_from_path(path).map_err(|err| match err {
        LoadError::Io(source) => anyhow::Error::new(source).context("Error reading the input file"),
        other => anyhow::Error::new(other).context("Invalid DFA description"),
    })
}

/// Exits with status 2 if any input contained a symbol outside the alphabet.
fn evaluate_inputs(automaton: &Automaton, inputs: &[String], trace: bool) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    let mut failed = false;

    for input in inputs {
        match automaton.run(input) {
            Ok(run) => {
                let verdict = if run.is_accepted() {
                    "accepted"
                } else {
                    "rejected"
                };
                if trace {
                    writeln!(out, "{input}: {verdict} ({})", run.path().join(" -> "))?;
                } else {
                    writeln!(out, "{input}: {verdict}")?;
                }
            }
            Err(err) => {
                failed = true;
                writeln!(out, "{input}: error: {err}")?;
            }
        }
    }

    Ok(if failed {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}
