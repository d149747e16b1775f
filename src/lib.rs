//! A bottom-up LR(0)/SLR(1) parser generator and driver.
//!
//! Given a context-free grammar, this crate augments it, builds the
//! canonical collection of LR(0) item sets, decides whether the grammar
//! is LR(0) or (failing that) SLR(1), synthesizes the corresponding
//! ACTION/GOTO table, and drives a shift-reduce recognizer over tokenized
//! input sentences, emitting a step-by-step trace.
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools"
//! (2nd Edition). Addison-Wesley, 2006.

pub mod cli;
pub mod collection;
pub mod conflict;
pub mod error;
pub mod first_follow;
pub mod frontend;
pub mod grammar;
pub mod items;
pub mod pretty;
pub mod recognizer;
pub mod symbol;
pub mod table;

pub use error::{GrammarError, Result};
pub use grammar::{Grammar, Production};
pub use recognizer::{Outcome, Recognition, TraceStep};
pub use symbol::Symbol;
pub use table::ParsingTables;
