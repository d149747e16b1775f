//! Table Builder: synthesizes the ACTION/GOTO tables from the canonical
//! collection under a chosen regime, and the regime-selection policy
//! (try LR(0), else SLR(1), else reject) that picks that regime.

use crate::collection::CanonicalCollection;
use crate::conflict::{self, Regime};
use crate::error::{GrammarError, Result};
use crate::first_follow::FollowSets;
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// One ACTION cell: shift to a state, reduce by a production, or accept.
/// Absence of an entry for a `(state, symbol)` key is the error/reject case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEntry {
    Shift(usize),
    Reduce(usize),
    Accept,
}

impl ActionEntry {
    fn describe(&self, grammar: &Grammar) -> String {
        match self {
            ActionEntry::Shift(state) => format!("shift to {state}"),
            ActionEntry::Reduce(production) => {
                format!("reduce by {}", grammar.production(*production))
            }
            ActionEntry::Accept => "accept".to_string(),
        }
    }
}

impl fmt::Display for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEntry::Shift(state) => write!(f, "s{state}"),
            ActionEntry::Reduce(production) => write!(f, "r{production}"),
            ActionEntry::Accept => write!(f, "acc"),
        }
    }
}

/// `(state, terminal_or_#) -> ActionEntry`.
#[derive(Debug, Default)]
pub struct ActionTable(HashMap<(usize, Symbol), ActionEntry>);

impl ActionTable {
    pub fn get(&self, state: usize, symbol: &Symbol) -> Option<ActionEntry> {
        self.0.get(&(state, symbol.clone())).copied()
    }
}

/// The restriction of the transition map to nonterminal entries.
#[derive(Debug, Default)]
pub struct GotoTable(HashMap<(usize, Symbol), usize>);

impl GotoTable {
    pub fn get(&self, state: usize, symbol: &Symbol) -> Option<usize> {
        self.0.get(&(state, symbol.clone())).copied()
    }
}

/// The synthesized tables plus the regime they were built under.
#[derive(Debug)]
pub struct ParsingTables {
    pub action: ActionTable,
    pub goto: GotoTable,
    pub regime: Regime,
}

/// Picks a conflict-free regime and builds its tables: tries LR(0) first
/// (cheap, needs no FOLLOW sets); falls back to SLR(1) using the supplied
/// FOLLOW sets; reports every conflict found in both passes if neither
/// regime is conflict-free. `follow` is always required by the caller here
/// (rather than computed lazily only on LR(0) failure) because the
/// surrounding pretty-printers display FOLLOW sets regardless of which
/// regime is ultimately chosen.
pub fn select_and_build(
    grammar: &Grammar,
    collection: &CanonicalCollection,
    follow: &FollowSets,
) -> Result<ParsingTables> {
    let lr0_conflicts = conflict::analyze_lr0(grammar, collection);
    if lr0_conflicts.is_empty() {
        return build(grammar, collection, Regime::Lr0, None);
    }

    let slr1_conflicts = conflict::analyze_slr1(grammar, collection, follow);
    if slr1_conflicts.is_empty() {
        return build(grammar, collection, Regime::Slr1, Some(follow));
    }

    let mut report = String::new();
    for conflict in lr0_conflicts.iter().chain(slr1_conflicts.iter()) {
        report.push_str(&conflict.describe(grammar));
        report.push('\n');
    }
    Err(GrammarError::NotParseable(report))
}

/// Builds the ACTION/GOTO tables under an already-chosen, already
/// conflict-free regime. `follow` must be `Some` for `Regime::Slr1`.
pub fn build(
    grammar: &Grammar,
    collection: &CanonicalCollection,
    regime: Regime,
    follow: Option<&FollowSets>,
) -> Result<ParsingTables> {
    let mut action: HashMap<(usize, Symbol), ActionEntry> = HashMap::new();

    for (state_index, state) in collection.states().iter().enumerate() {
        for item in state {
            if let Some(symbol) = item.symbol_after_dot(grammar) {
                if grammar.is_terminal(&symbol) {
                    if let Some(target) = collection.transition(state_index, &symbol) {
                        insert(&mut action, grammar, state_index, symbol, ActionEntry::Shift(target))?;
                    }
                }
                continue;
            }

            let production = grammar.production(item.production);
            if item.production == 0 && production.right == [grammar.start_symbol().clone()] {
                insert(
                    &mut action,
                    grammar,
                    state_index,
                    Symbol::end_marker(),
                    ActionEntry::Accept,
                )?;
                continue;
            }

            let reduce_symbols: Vec<Symbol> = match regime {
                Regime::Lr0 => grammar.terminals().iter().cloned().collect(),
                Regime::Slr1 => {
                    let follow = follow.expect("SLR(1) regime requires FOLLOW sets");
                    let mut symbols: Vec<Symbol> = follow
                        .get(&production.left)
                        .into_iter()
                        .flatten()
                        .filter(|s| grammar.is_terminal(s))
                        .cloned()
                        .collect();
                    symbols.push(Symbol::end_marker());
                    symbols
                }
            };

            for symbol in reduce_symbols {
                insert(
                    &mut action,
                    grammar,
                    state_index,
                    symbol,
                    ActionEntry::Reduce(item.production),
                )?;
            }
        }
    }

    let mut goto: HashMap<(usize, Symbol), usize> = HashMap::new();
    for (&(state, ref symbol), &target) in collection.transitions() {
        if grammar.is_nonterminal(symbol) {
            goto.insert((state, symbol.clone()), target);
        }
    }

    Ok(ParsingTables {
        action: ActionTable(action),
        goto: GotoTable(goto),
        regime,
    })
}

fn insert(
    table: &mut HashMap<(usize, Symbol), ActionEntry>,
    grammar: &Grammar,
    state: usize,
    symbol: Symbol,
    entry: ActionEntry,
) -> Result<()> {
    match table.entry((state, symbol.clone())) {
        Entry::Vacant(slot) => {
            slot.insert(entry);
            Ok(())
        }
        Entry::Occupied(slot) if *slot.get() == entry => Ok(()),
        Entry::Occupied(slot) => Err(GrammarError::NotParseable(format!(
            "conflicting actions in state {state} on '{symbol}': {} vs. {}",
            slot.get().describe(grammar),
            entry.describe(grammar)
        ))),
    }
}
