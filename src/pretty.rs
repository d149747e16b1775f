//! Pretty-printers: human-readable renderings of the grammar, item sets,
//! FOLLOW sets, ACTION/GOTO table, and recognizer trace. Pure formatting;
//! no algorithmic weight, no I/O of its own.

use crate::collection::CanonicalCollection;
use crate::first_follow::FollowSets;
use crate::grammar::Grammar;
use crate::items::{Item, ItemSet};
use crate::recognizer::TraceStep;
use crate::symbol::{symbols_to_string, Symbol};
use crate::table::ParsingTables;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Renders the grammar summary: start symbol, augmented start symbol, the
/// nonterminal set, and every numbered production (`ε` for empty bodies).
pub fn render_grammar(grammar: &Grammar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "start symbol: {}", grammar.start_symbol());
    let _ = writeln!(out, "augmented start symbol: {}", grammar.augmented_start());

    let nonterminals: BTreeSet<&Symbol> = grammar.nonterminals().iter().collect();
    let names = nonterminals
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "nonterminals: {{{names}}}");

    let _ = writeln!(out, "productions:");
    for (index, production) in grammar.all_productions() {
        let _ = writeln!(out, "  {index}: {production}");
    }
    out
}

/// Renders one item as `A -> α . β`, with `.ε`/`ε.` standing in for an
/// empty right-hand side.
pub fn render_item(item: &Item, grammar: &Grammar) -> String {
    let production = grammar.production(item.production);
    if production.right.is_empty() {
        return format!("{} -> .ε", production.left);
    }

    let before = symbols_to_string(&production.right[..item.dot]);
    let after = symbols_to_string(&production.right[item.dot..]);
    match (before.is_empty(), after.is_empty()) {
        (true, true) => format!("{} -> .ε", production.left),
        (true, false) => format!("{} -> . {after}", production.left),
        (false, true) => format!("{} -> {before} .", production.left),
        (false, false) => format!("{} -> {before} . {after}", production.left),
    }
}

/// Renders one item set, one item per line.
pub fn render_item_set(items: &ItemSet, grammar: &Grammar) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "  {}", render_item(item, grammar));
    }
    out
}

/// Renders every state in the canonical collection.
pub fn render_collection(collection: &CanonicalCollection, grammar: &Grammar) -> String {
    let mut out = String::new();
    for (index, state) in collection.states().iter().enumerate() {
        let _ = writeln!(out, "state {index}:");
        out.push_str(&render_item_set(state, grammar));
    }
    out
}

/// Renders FOLLOW(A) for every nonterminal, one line each.
pub fn render_follow_sets(follow: &FollowSets, grammar: &Grammar) -> String {
    let mut out = String::new();
    let nonterminals: BTreeSet<&Symbol> = grammar.nonterminals().iter().collect();
    for nonterminal in nonterminals {
        let set: BTreeSet<&Symbol> = follow
            .get(nonterminal)
            .into_iter()
            .flatten()
            .collect();
        let rendered = set.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "FOLLOW({nonterminal}) = {{{rendered}}}");
    }
    out
}

/// Renders the combined ACTION/GOTO table: columns `terminals ∪ {#}` then
/// `nonterminals \ {augmented_start}`, rows per state, cells `sN`/`rN`/
/// `acc`/blank.
pub fn render_table(tables: &ParsingTables, collection: &CanonicalCollection, grammar: &Grammar) -> String {
    let terminal_columns: BTreeSet<&Symbol> = grammar.terminals().iter().collect();
    let nonterminal_columns: BTreeSet<&Symbol> = grammar
        .nonterminals()
        .iter()
        .filter(|s| *s != grammar.augmented_start())
        .collect();

    let mut out = String::new();
    let _ = write!(out, "{:<8}", "state");
    for column in terminal_columns.iter().chain(nonterminal_columns.iter()) {
        let _ = write!(out, "{:<8}", column.as_str());
    }
    out.push('\n');

    for state_index in 0..collection.state_count() {
        let _ = write!(out, "{:<8}", state_index);
        for column in &terminal_columns {
            let cell = tables
                .action
                .get(state_index, column)
                .map(|entry| entry.to_string())
                .unwrap_or_default();
            let _ = write!(out, "{cell:<8}");
        }
        for column in &nonterminal_columns {
            let cell = tables
                .goto
                .get(state_index, column)
                .map(|target| target.to_string())
                .unwrap_or_default();
            let _ = write!(out, "{cell:<8}");
        }
        out.push('\n');
    }
    out
}

/// Renders a single trace step, matching `TraceStep`'s `Display` impl.
pub fn render_trace_step(step: &TraceStep) -> String {
    step.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_follow::{compute_first_sets, compute_follow_sets};
    use crate::table::select_and_build;

    fn grammar(lines: &[&str]) -> Grammar {
        Grammar::ingest(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn renders_epsilon_item_with_surrounding_dots() {
        let g = grammar(&["S -> A", "A -> ε"]);
        let item = Item::new(2, 0);
        assert_eq!(render_item(&item, &g), "A -> .ε");
    }

    #[test]
    fn renders_dotted_item_mid_production() {
        let g = grammar(&["S -> a b"]);
        let item = Item::new(1, 1);
        assert_eq!(render_item(&item, &g), "S -> a . b");
    }

    #[test]
    fn grammar_summary_includes_augmented_start() {
        let g = grammar(&["S -> a"]);
        let rendered = render_grammar(&g);
        assert!(rendered.contains(g.augmented_start().as_str()));
    }

    #[test]
    fn table_rendering_includes_accept_cell() {
        let g = grammar(&["S -> a"]);
        let cc = CanonicalCollection::build(&g);
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        let tables = select_and_build(&g, &cc, &follow).unwrap();
        let rendered = render_table(&tables, &cc, &g);
        assert!(rendered.contains("acc"));
    }
}
