//! CLI & Driver: wires the Front-End through every pipeline phase, prints
//! pretty-printed intermediate artifacts, and maps phase failures onto
//! process exit status.

use crate::collection::CanonicalCollection;
use crate::error::{GrammarError, Result};
use crate::first_follow::{compute_first_sets, compute_follow_sets};
use crate::frontend;
use crate::grammar::Grammar;
use crate::pretty;
use crate::recognizer::{self, Outcome};
use crate::table;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// A bottom-up LR(0)/SLR(1) parser generator and driver.
#[derive(Parser, Debug)]
#[command(name = "slr-gen", version, about)]
pub struct Args {
    /// Path to the grammar file (reads stdin if omitted).
    #[arg(long)]
    pub grammar: Option<PathBuf>,

    /// Path to the input sentences file (reads stdin, after the grammar,
    /// if omitted).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Raise tracing verbosity. Repeatable: `-v` for debug, `-vv` for
    /// trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Initializes the `tracing` subscriber at a verbosity derived from `-v`
/// repetition count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("slr_gen={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the full pipeline for the parsed `Args`, printing pretty-printed
/// artifacts and each sentence's trace to stdout. Returns the process
/// exit status implied by the final outcome (0 on success).
pub fn run(args: &Args) -> Result<i32> {
    let grammar_lines = read_grammar_lines(args.grammar.as_deref())?;
    let grammar = Grammar::ingest(&grammar_lines)?;
    tracing::info!(productions = grammar.production_count(), "grammar ingested");
    println!("{}", pretty::render_grammar(&grammar));

    let first = compute_first_sets(&grammar);
    let follow = compute_follow_sets(&grammar, &first);
    println!("{}", pretty::render_follow_sets(&follow, &grammar));

    let collection = CanonicalCollection::build(&grammar);
    tracing::info!(states = collection.state_count(), "canonical collection built");
    println!("{}", pretty::render_collection(&collection, &grammar));

    let tables = table::select_and_build(&grammar, &collection, &follow)?;
    tracing::info!(regime = %tables.regime, "parsing tables built");
    println!("{}", pretty::render_table(&tables, &collection, &grammar));

    let mut exit_code = 0;
    for sentence in read_input_sentences(args.input.as_deref())? {
        let tokens = frontend::tokenize_sentence(&sentence);
        tracing::info!(sentence = %sentence, "recognition started");
        let recognition = recognizer::recognize(&grammar, &tables, &tokens)?;
        for step in &recognition.trace {
            println!("{}", pretty::render_trace_step(step));
        }
        match recognition.outcome {
            Outcome::Accept => tracing::info!(sentence = %sentence, "accept"),
            Outcome::Reject => {
                tracing::info!(sentence = %sentence, "reject");
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

fn read_grammar_lines(path: Option<&std::path::Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let mut reader = BufReader::new(File::open(path)?);
            frontend::read_grammar_lines(&mut reader)
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            frontend::read_grammar_lines(&mut reader)
        }
    }
}

fn read_input_sentences(path: Option<&std::path::Path>) -> Result<Vec<String>> {
    let lines: Vec<String> = match path {
        Some(path) => BufReader::new(File::open(path)?).lines().collect::<io::Result<_>>()?,
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };
    Ok(lines.into_iter().filter(|line| !line.trim().is_empty()).collect())
}

/// Maps a top-level pipeline error to its process exit status, logging a
/// diagnostic first.
pub fn report_error(err: &GrammarError) -> i32 {
    tracing::error!(error = %err, "pipeline failed");
    eprintln!("error: {err}");
    err.exit_code()
}
