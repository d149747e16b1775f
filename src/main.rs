//! slr-gen
//!
//! A bottom-up LR(0)/SLR(1) parser generator and driver.
//!
//! This implementation provides:
//! - Augmentation and canonical LR(0) item-set construction
//! - FIRST/FOLLOW computation
//! - LR(0)/SLR(1) conflict detection and ACTION/GOTO table synthesis
//! - A table-driven shift-reduce recognizer with step-by-step tracing
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools" (2nd Edition).
//! Addison-Wesley, 2006.

mod cli;
mod collection;
mod conflict;
mod error;
mod first_follow;
mod frontend;
mod grammar;
mod items;
mod pretty;
mod recognizer;
mod symbol;
mod table;

use clap::Parser;
use std::process;

fn main() {
    let args = cli::Args::parse();
    cli::init_tracing(args.verbose);

    match cli::run(&args) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => process::exit(cli::report_error(&err)),
    }
}
