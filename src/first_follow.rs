//! FIRST and FOLLOW set computation for context-free grammars.
//!
//! Implements the textbook fixed-point algorithms (Aho et al., "Compilers:
//! Principles, Techniques, and Tools", 2nd ed., §4.4) over the frozen
//! Grammar Store.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};

/// FIRST(symbol) for every terminal, nonterminal, and `ε` in the grammar.
pub type FirstSets = HashMap<Symbol, HashSet<Symbol>>;

/// FOLLOW(nonterminal) for every nonterminal in the grammar.
pub type FollowSets = HashMap<Symbol, HashSet<Symbol>>;

/// Computes FIRST for every symbol in the grammar by fixed-point
/// iteration: FIRST(terminal) = {terminal}, FIRST(ε) = {ε}, and for each
/// production `A -> X1 X2 ... Xn`, FIRST(A) absorbs the FIRST sets of the
/// leading `Xi` up to (and including, if all derive ε) the first one that
/// cannot derive ε.
pub fn compute_first_sets(grammar: &Grammar) -> FirstSets {
    let mut first: FirstSets = HashMap::new();

    for terminal in grammar.terminals() {
        first.insert(terminal.clone(), HashSet::from([terminal.clone()]));
    }
    first.insert(Symbol::epsilon(), HashSet::from([Symbol::epsilon()]));
    for nonterminal in grammar.nonterminals() {
        first.entry(nonterminal.clone()).or_default();
    }

    let mut changed = true;
    while changed {
        changed = false;
        for (_, production) in grammar.all_productions() {
            let rhs_first = first_of_sequence(&first, &production.right);
            let entry = first.entry(production.left.clone()).or_default();
            let before = entry.len();
            entry.extend(rhs_first);
            if entry.len() != before {
                changed = true;
            }
        }
    }

    first
}

/// FIRST of an arbitrary symbol sequence: the standard `first_k` walk that
/// stops at the first symbol whose FIRST set lacks `ε`, and adds `ε` to the
/// result only if every symbol (or the sequence is empty) derives it.
pub fn first_of_sequence(first: &FirstSets, sequence: &[Symbol]) -> HashSet<Symbol> {
    let mut result = HashSet::new();
    let mut all_derive_epsilon = true;

    for symbol in sequence {
        let first_symbol = first.get(symbol).cloned().unwrap_or_default();
        result.extend(first_symbol.iter().filter(|s| !s.is_epsilon()).cloned());

        if !first_symbol.contains(&Symbol::epsilon()) {
            all_derive_epsilon = false;
            break;
        }
    }

    if all_derive_epsilon {
        result.insert(Symbol::epsilon());
    }

    result
}

/// Computes FOLLOW for every nonterminal: FOLLOW(start) always contains
/// `#`; for each `A -> αBβ` with B nonterminal, FOLLOW(B) absorbs
/// FIRST(β)\{ε}, and FOLLOW(A) as well if β is empty or nullable.
pub fn compute_follow_sets(grammar: &Grammar, first: &FirstSets) -> FollowSets {
    let mut follow: FollowSets = HashMap::new();
    for nonterminal in grammar.nonterminals() {
        follow.entry(nonterminal.clone()).or_default();
    }
    follow
        .entry(grammar.start_symbol().clone())
        .or_default()
        .insert(Symbol::end_marker());

    let mut changed = true;
    while changed {
        changed = false;
        for (_, production) in grammar.all_productions() {
            let rhs = &production.right;
            for (i, symbol) in rhs.iter().enumerate() {
                if !grammar.is_nonterminal(symbol) {
                    continue;
                }

                let beta = &rhs[i + 1..];
                let first_beta = first_of_sequence(first, beta);

                let mut additions: HashSet<Symbol> = first_beta
                    .iter()
                    .filter(|s| !s.is_epsilon())
                    .cloned()
                    .collect();

                if beta.is_empty() || first_beta.contains(&Symbol::epsilon()) {
                    if let Some(follow_lhs) = follow.get(&production.left) {
                        additions.extend(follow_lhs.iter().cloned());
                    }
                }

                let entry = follow.entry(symbol.clone()).or_default();
                let before = entry.len();
                entry.extend(additions);
                if entry.len() != before {
                    changed = true;
                }
            }
        }
    }

    follow
}
