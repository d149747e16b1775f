//! Grammar Store: productions, terminal/nonterminal sets, start symbol,
//! and the augmented start symbol, frozen once at ingestion time and
//! addressed by small integer indices from then on.

use crate::error::{GrammarError, Result};
use crate::frontend;
use crate::symbol::{symbols_to_string, tokens_to_symbols, Symbol};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A production rule: `left -> right`. An empty `right` denotes an
/// ε-production.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub left: Symbol,
    pub right: Vec<Symbol>,
}

impl Production {
    pub fn new(left: Symbol, right: Vec<Symbol>) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.right.is_empty() {
            write!(f, "{} -> ε", self.left)
        } else {
            write!(f, "{} -> {}", self.left, symbols_to_string(&self.right))
        }
    }
}

/// The Grammar Store: frozen after `ingest`, read-only thereafter.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// All productions, numbered 0..P-1; production 0 is always `S' -> S`.
    productions: Vec<Production>,
    nonterminals: HashSet<Symbol>,
    terminals: HashSet<Symbol>,
    start_symbol: Symbol,
    augmented_start: Symbol,
    /// Nonterminal -> indices of its productions, in insertion order.
    production_map: HashMap<Symbol, Vec<usize>>,
}

impl Grammar {
    /// Ingests a grammar from raw text lines of the form
    /// `L -> α₁ | α₂ | …` (see `frontend::split_grammar_line`).
    pub fn ingest(lines: &[String]) -> Result<Self> {
        let mut raw_productions: Vec<(Symbol, Vec<Symbol>)> = Vec::new();
        let mut start_symbol: Option<Symbol> = None;

        for line in lines {
            let (lhs, alternatives) = frontend::split_grammar_line(line)?;
            let lhs = Symbol::new(&lhs);
            if start_symbol.is_none() {
                start_symbol = Some(lhs.clone());
            }
            for alt in alternatives {
                raw_productions.push((lhs.clone(), tokens_to_symbols(&alt)));
            }
        }

        let start_symbol = start_symbol.ok_or(GrammarError::EmptyGrammar)?;
        Self::from_productions(start_symbol, raw_productions)
    }

    /// Builds the frozen Grammar Store from a start symbol and the
    /// already-tokenized user productions (i.e. everything the front-end
    /// splitter produced, before augmentation and classification).
    fn from_productions(
        start_symbol: Symbol,
        user_productions: Vec<(Symbol, Vec<Symbol>)>,
    ) -> Result<Self> {
        if user_productions.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }

        // Any symbol on some left-hand side is a nonterminal.
        let mut nonterminals: HashSet<Symbol> = user_productions
            .iter()
            .map(|(lhs, _)| lhs.clone())
            .collect();

        // The fresh augmented-start name must avoid colliding with *any*
        // symbol the user's grammar uses, not just the nonterminals: a
        // collision with a right-hand-side-only symbol would otherwise get
        // silently reclassified as a nonterminal once `augmented_start` is
        // inserted below.
        let mut all_symbols = nonterminals.clone();
        for (_, rhs) in &user_productions {
            all_symbols.extend(rhs.iter().cloned());
        }

        let augmented_start = fresh_augmented_start(&start_symbol, &all_symbols);
        nonterminals.insert(augmented_start.clone());

        // All other right-hand-side symbols are terminals.
        let mut terminals: HashSet<Symbol> = HashSet::new();
        for (_, rhs) in &user_productions {
            for symbol in rhs {
                if !nonterminals.contains(symbol) {
                    terminals.insert(symbol.clone());
                }
            }
        }
        terminals.insert(Symbol::end_marker());

        let mut productions = Vec::with_capacity(user_productions.len() + 1);
        productions.push(Production::new(
            augmented_start.clone(),
            vec![start_symbol.clone()],
        ));
        for (lhs, rhs) in user_productions {
            productions.push(Production::new(lhs, rhs));
        }

        let mut production_map: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for (index, production) in productions.iter().enumerate() {
            production_map
                .entry(production.left.clone())
                .or_default()
                .push(index);
        }

        Ok(Self {
            productions,
            nonterminals,
            terminals,
            start_symbol,
            augmented_start,
            production_map,
        })
    }

    /// Indexed access to a single production by its canonical number.
    pub fn production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    /// The number of productions (including the augmented production 0).
    pub fn production_count(&self) -> usize {
        self.productions.len()
    }

    /// All productions whose left side is `nonterminal`, in the order
    /// they were ingested.
    pub fn productions_for(&self, nonterminal: &Symbol) -> impl Iterator<Item = (usize, &Production)> {
        self.production_map
            .get(nonterminal)
            .into_iter()
            .flatten()
            .map(move |&index| (index, &self.productions[index]))
    }

    pub fn all_productions(&self) -> impl Iterator<Item = (usize, &Production)> {
        self.productions.iter().enumerate()
    }

    pub fn nonterminals(&self) -> &HashSet<Symbol> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    pub fn is_terminal(&self, symbol: &Symbol) -> bool {
        self.terminals.contains(symbol)
    }

    pub fn is_nonterminal(&self, symbol: &Symbol) -> bool {
        self.nonterminals.contains(symbol)
    }

    pub fn start_symbol(&self) -> &Symbol {
        &self.start_symbol
    }

    pub fn augmented_start(&self) -> &Symbol {
        &self.augmented_start
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, production) in self.productions.iter().enumerate() {
            writeln!(f, "{index}: {production}")?;
        }
        Ok(())
    }
}

/// Forms the augmented start symbol by appending a prime to `start`,
/// appending further primes until the name is unused by the grammar
/// (resolving the open question on collision rather than ignoring it).
fn fresh_augmented_start(start: &Symbol, existing: &HashSet<Symbol>) -> Symbol {
    let mut candidate = format!("{start}'");
    while existing.iter().any(|s| s.as_str() == candidate) {
        candidate.push('\'');
    }
    Symbol::new(candidate)
}
