//! LR(0) items and item sets: the CLOSURE and GOTO operations the
//! Item-Set Builder composes into the canonical collection.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::BTreeSet;

/// An LR(0) item `(production_index, dot_position)`. Addressing the
/// production by index rather than embedding a cloned `Production` keeps
/// an `Item` a cheap `Copy` pair, which matters because closures clone
/// and hash item sets repeatedly while building the canonical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub production: usize,
    pub dot: usize,
}

impl Item {
    pub fn new(production: usize, dot: usize) -> Self {
        Self { production, dot }
    }

    /// The symbol immediately after the dot, if the dot isn't at the end.
    pub fn symbol_after_dot(&self, grammar: &Grammar) -> Option<Symbol> {
        grammar.production(self.production).right.get(self.dot).cloned()
    }

    /// Whether the dot is at the end of the production's right side (a
    /// reduce point). For an ε-production this is `(p, 0)`.
    pub fn is_reduce_item(&self, grammar: &Grammar) -> bool {
        self.dot >= grammar.production(self.production).right.len()
    }
}

/// A state in the LR(0) automaton: an (ordered, for determinism) set of
/// items. Two `ItemSet`s are equal iff they contain the same items.
pub type ItemSet = BTreeSet<Item>;

/// CLOSURE(I): repeatedly add `(q, 0)` for every production `q` whose
/// left side is the nonterminal right after some item's dot, until no
/// pass adds anything new.
pub fn closure(grammar: &Grammar, items: ItemSet) -> ItemSet {
    let mut result = items;
    let mut changed = true;

    while changed {
        changed = false;
        let frontier: Vec<Item> = result.iter().copied().collect();

        for item in frontier {
            if let Some(symbol) = item.symbol_after_dot(grammar) {
                if grammar.is_nonterminal(&symbol) {
                    for (production_index, _) in grammar.productions_for(&symbol) {
                        if result.insert(Item::new(production_index, 0)) {
                            changed = true;
                        }
                    }
                }
            }
        }
    }

    result
}

/// GOTO(I, X): advance the dot past `X` in every item of `I` that has `X`
/// immediately after its dot, then close the result. Returns an empty set
/// if no item in `I` can advance on `X`.
pub fn goto(grammar: &Grammar, items: &ItemSet, symbol: &Symbol) -> ItemSet {
    let advanced: ItemSet = items
        .iter()
        .filter(|item| item.symbol_after_dot(grammar).as_ref() == Some(symbol))
        .map(|item| Item::new(item.production, item.dot + 1))
        .collect();

    closure(grammar, advanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn grammar(lines: &[&str]) -> Grammar {
        Grammar::ingest(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn closure_includes_the_seed_item() {
        let g = grammar(&["S -> a S b | a b"]);
        let seed: ItemSet = BTreeSet::from([Item::new(0, 0)]);
        let closed = closure(&g, seed);
        assert!(closed.contains(&Item::new(0, 0)));
    }

    #[test]
    fn closure_adds_productions_of_the_symbol_after_the_dot() {
        let g = grammar(&["S -> A", "A -> a"]);
        let seed: ItemSet = BTreeSet::from([Item::new(0, 0)]);
        let closed = closure(&g, seed);
        // S' -> .S adds S -> .A which adds A -> .a
        assert!(closed.contains(&Item::new(1, 0))); // S -> .A
        assert!(closed.contains(&Item::new(2, 0))); // A -> .a
    }

    #[test]
    fn closure_is_idempotent_on_goto_results() {
        let g = grammar(&["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"]);
        let seed: ItemSet = BTreeSet::from([Item::new(0, 0)]);
        let i0 = closure(&g, seed);
        let moved = goto(&g, &i0, &Symbol::new("id"));
        assert_eq!(closure(&g, moved.clone()), moved);
    }

    #[test]
    fn goto_on_unproducible_symbol_is_empty() {
        let g = grammar(&["S -> a"]);
        let seed: ItemSet = BTreeSet::from([Item::new(0, 0)]);
        let i0 = closure(&g, seed);
        assert!(goto(&g, &i0, &Symbol::new("zzz")).is_empty());
    }
}
