//! Error types for the grammar analysis and recognition pipeline.

use thiserror::Error;

/// Errors that can occur while ingesting a grammar or building its tables.
///
/// Each variant corresponds to one of the error kinds named in the design:
/// a malformed grammar line, an empty grammar, a grammar that is neither
/// LR(0) nor SLR(1), or an input sentence that references an undefined
/// symbol. Recognizer rejection (`ParseReject`) is *not* one of these: a
/// rejected sentence is an ordinary parse outcome, not a pipeline failure,
/// so it is carried in `Recognition` (see `recognizer.rs`) rather than here.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// A grammar line was missing `->`, had an empty left-hand side, or
    /// contained a malformed alternative.
    #[error("grammar syntax error: {0}")]
    GrammarSyntaxError(String),

    /// Ingestion produced zero productions.
    #[error("empty grammar: no productions were ingested")]
    EmptyGrammar,

    /// The grammar is neither LR(0) nor SLR(1); construction aborted.
    #[error("grammar is neither LR(0) nor SLR(1):\n{0}")]
    NotParseable(String),

    /// An input sentence referenced a symbol outside the grammar's
    /// terminal (and nonterminal) set.
    #[error("undefined input symbol(s) [{symbols}]; valid terminals: {valid_terminals}")]
    UndefinedInputSymbol {
        symbols: String,
        valid_terminals: String,
    },

    /// Propagated I/O failure while reading grammar or input text.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrammarError {
    /// Small, distinct process exit codes per error category (§6); a
    /// freely-chosen but stable mapping that aids scripting against the
    /// CLI. Successful recognition exits 0; a rejected sentence (not an
    /// error) also maps to its own nonzero code from `cli::run`.
    pub fn exit_code(&self) -> i32 {
        match self {
            GrammarError::GrammarSyntaxError(_) => 2,
            GrammarError::EmptyGrammar => 3,
            GrammarError::NotParseable(_) => 4,
            GrammarError::UndefinedInputSymbol { .. } => 5,
            GrammarError::Io(_) => 6,
        }
    }
}

/// Type alias for `Result`s in this crate.
pub type Result<T> = std::result::Result<T, GrammarError>;
