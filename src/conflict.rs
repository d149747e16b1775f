//! Conflict Analyzer: detects shift-reduce and reduce-reduce conflicts in
//! the canonical collection under the LR(0) regime (any terminal) and the
//! SLR(1) regime (restricted to FOLLOW of the reducing production's left
//! side).

use crate::collection::CanonicalCollection;
use crate::first_follow::FollowSets;
use crate::grammar::Grammar;
use crate::items::{Item, ItemSet};
use crate::symbol::Symbol;
use std::collections::BTreeSet;
use std::fmt;

/// Which regime a detected conflict was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Lr0,
    Slr1,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Lr0 => write!(f, "LR(0)"),
            Regime::Slr1 => write!(f, "SLR(1)"),
        }
    }
}

/// A single detected conflict, carrying enough detail to render a human
/// diagnostic (state, items involved, offending symbol(s)).
#[derive(Debug, Clone)]
pub enum ConflictKind {
    ShiftReduce {
        regime: Regime,
        state: usize,
        symbol: Symbol,
        reduce_production: usize,
    },
    ReduceReduce {
        regime: Regime,
        state: usize,
        symbol: Symbol,
        production_a: usize,
        production_b: usize,
    },
}

impl ConflictKind {
    pub fn describe(&self, grammar: &Grammar) -> String {
        match self {
            ConflictKind::ShiftReduce {
                regime,
                state,
                symbol,
                reduce_production,
            } => format!(
                "{regime} shift/reduce conflict in state {state} on '{symbol}': shift vs. reduce by {}",
                grammar.production(*reduce_production)
            ),
            ConflictKind::ReduceReduce {
                regime,
                state,
                symbol,
                production_a,
                production_b,
            } => format!(
                "{regime} reduce/reduce conflict in state {state} on '{symbol}': {} vs. {}",
                grammar.production(*production_a),
                grammar.production(*production_b)
            ),
        }
    }
}

/// Items with the dot at the end (reduce points), and the set of
/// terminals appearing immediately after the dot elsewhere in the state
/// (shift points).
fn reducers_and_shift_symbols(grammar: &Grammar, state: &ItemSet) -> (Vec<Item>, BTreeSet<Symbol>) {
    let mut reducers = Vec::new();
    let mut shift_symbols = BTreeSet::new();

    for item in state {
        if item.is_reduce_item(grammar) {
            reducers.push(*item);
        } else if let Some(symbol) = item.symbol_after_dot(grammar) {
            if grammar.is_terminal(&symbol) {
                shift_symbols.insert(symbol);
            }
        }
    }

    (reducers, shift_symbols)
}

/// Detects conflicts under the LR(0) regime: a reducer alongside any
/// shift is always a shift-reduce conflict, and two or more reducers in
/// one state is unconditionally a reduce-reduce conflict (no lookahead
/// distinguishes them) — this strict rule is deliberate, not a
/// placeholder for falling through to SLR(1).
pub fn analyze_lr0(grammar: &Grammar, collection: &CanonicalCollection) -> Vec<ConflictKind> {
    let mut conflicts = Vec::new();

    for (state_index, state) in collection.states().iter().enumerate() {
        let (reducers, shift_symbols) = reducers_and_shift_symbols(grammar, state);

        if !reducers.is_empty() {
            for item in &reducers {
                for symbol in &shift_symbols {
                    conflicts.push(ConflictKind::ShiftReduce {
                        regime: Regime::Lr0,
                        state: state_index,
                        symbol: symbol.clone(),
                        reduce_production: item.production,
                    });
                }
            }
        }

        if reducers.len() >= 2 {
            for i in 0..reducers.len() {
                for j in (i + 1)..reducers.len() {
                    conflicts.push(ConflictKind::ReduceReduce {
                        regime: Regime::Lr0,
                        state: state_index,
                        symbol: Symbol::end_marker(),
                        production_a: reducers[i].production,
                        production_b: reducers[j].production,
                    });
                }
            }
        }
    }

    conflicts
}

/// Detects conflicts under the SLR(1) regime: a shift-reduce conflict
/// requires the shifted terminal to lie in FOLLOW of the reducing
/// nonterminal; a reduce-reduce conflict requires the two reducers'
/// FOLLOW sets to share a terminal.
pub fn analyze_slr1(
    grammar: &Grammar,
    collection: &CanonicalCollection,
    follow: &FollowSets,
) -> Vec<ConflictKind> {
    let mut conflicts = Vec::new();
    let follow_of = |symbol: &Symbol| -> BTreeSet<Symbol> {
        follow
            .get(symbol)
            .into_iter()
            .flatten()
            .filter(|s| grammar.is_terminal(s))
            .cloned()
            .collect()
    };

    for (state_index, state) in collection.states().iter().enumerate() {
        let (reducers, shift_symbols) = reducers_and_shift_symbols(grammar, state);

        for item in &reducers {
            let left = &grammar.production(item.production).left;
            let reduce_symbols = follow_of(left);
            for symbol in shift_symbols.intersection(&reduce_symbols) {
                conflicts.push(ConflictKind::ShiftReduce {
                    regime: Regime::Slr1,
                    state: state_index,
                    symbol: symbol.clone(),
                    reduce_production: item.production,
                });
            }
        }

        for i in 0..reducers.len() {
            for j in (i + 1)..reducers.len() {
                let left_a = &grammar.production(reducers[i].production).left;
                let left_b = &grammar.production(reducers[j].production).left;
                if left_a == left_b {
                    continue;
                }
                let follow_a = follow_of(left_a);
                let follow_b = follow_of(left_b);
                for symbol in follow_a.intersection(&follow_b) {
                    conflicts.push(ConflictKind::ReduceReduce {
                        regime: Regime::Slr1,
                        state: state_index,
                        symbol: symbol.clone(),
                        production_a: reducers[i].production,
                        production_b: reducers[j].production,
                    });
                }
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_follow::{compute_first_sets, compute_follow_sets};
    use crate::grammar::Grammar;

    fn grammar(lines: &[&str]) -> Grammar {
        Grammar::ingest(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn arithmetic_grammar_has_lr0_conflicts_but_not_slr1() {
        let g = grammar(&["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"]);
        let cc = CanonicalCollection::build(&g);

        assert!(!analyze_lr0(&g, &cc).is_empty());

        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(analyze_slr1(&g, &cc, &follow).is_empty());
    }

    #[test]
    fn pure_lr0_grammar_has_no_conflicts() {
        let g = grammar(&["S -> a S b | a b"]);
        let cc = CanonicalCollection::build(&g);
        assert!(analyze_lr0(&g, &cc).is_empty());
    }

    #[test]
    fn dangling_else_style_grammar_is_not_slr1() {
        let g = grammar(&["S -> i S e S | i S | a"]);
        let cc = CanonicalCollection::build(&g);
        assert!(!analyze_lr0(&g, &cc).is_empty());

        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(!analyze_slr1(&g, &cc, &follow).is_empty());
    }
}
