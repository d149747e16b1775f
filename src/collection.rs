//! Item-Set Builder: constructs the canonical collection of LR(0) item
//! sets and the transition map indexed by `(state, symbol) -> state`.

use crate::grammar::Grammar;
use crate::items::{closure, goto, Item, ItemSet};
use crate::symbol::Symbol;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// `(state_index, Symbol) -> state_index`. Nonterminal entries are GOTO;
/// terminal entries seed SHIFT actions.
pub type TransitionMap = HashMap<(usize, Symbol), usize>;

/// The canonical collection plus its transition map, built once from a
/// frozen grammar.
#[derive(Debug)]
pub struct CanonicalCollection {
    states: Vec<ItemSet>,
    transitions: TransitionMap,
}

impl CanonicalCollection {
    /// Builds the canonical collection starting from `closure({(0, 0)})`,
    /// expanding the worklist in FIFO order so state numbering matches the
    /// specified observable behavior.
    pub fn build(grammar: &Grammar) -> Self {
        let initial = closure(grammar, BTreeSet::from([Item::new(0, 0)]));

        let mut states = vec![initial];
        let mut transitions = TransitionMap::new();
        let mut worklist: VecDeque<usize> = VecDeque::from([0]);

        while let Some(state_index) = worklist.pop_front() {
            let state = states[state_index].clone();

            let mut symbols_after_dot: BTreeSet<Symbol> = BTreeSet::new();
            for item in &state {
                if let Some(symbol) = item.symbol_after_dot(grammar) {
                    symbols_after_dot.insert(symbol);
                }
            }

            for symbol in symbols_after_dot {
                let target = goto(grammar, &state, &symbol);
                if target.is_empty() {
                    continue;
                }

                let target_index = match states.iter().position(|s| s == &target) {
                    Some(existing) => existing,
                    None => {
                        let new_index = states.len();
                        states.push(target);
                        worklist.push_back(new_index);
                        new_index
                    }
                };

                transitions.insert((state_index, symbol), target_index);
            }
        }

        Self { states, transitions }
    }

    pub fn states(&self) -> &[ItemSet] {
        &self.states
    }

    pub fn state(&self, index: usize) -> &ItemSet {
        &self.states[index]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transitions(&self) -> &TransitionMap {
        &self.transitions
    }

    pub fn transition(&self, state: usize, symbol: &Symbol) -> Option<usize> {
        self.transitions.get(&(state, symbol.clone())).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn grammar(lines: &[&str]) -> Grammar {
        Grammar::ingest(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn state_zero_contains_the_augmented_seed_item() {
        let g = grammar(&["S -> a"]);
        let cc = CanonicalCollection::build(&g);
        assert!(cc.state(0).contains(&Item::new(0, 0)));
    }

    #[test]
    fn single_production_grammar_has_four_states() {
        // S -> a : canonical collection has exactly 4 states.
        let g = grammar(&["S -> a"]);
        let cc = CanonicalCollection::build(&g);
        assert_eq!(cc.state_count(), 4);
    }

    #[test]
    fn arithmetic_grammar_has_twelve_states() {
        let g = grammar(&["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"]);
        let cc = CanonicalCollection::build(&g);
        assert_eq!(cc.state_count(), 12);
    }

    #[test]
    fn every_state_is_reachable_from_state_zero() {
        let g = grammar(&["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"]);
        let cc = CanonicalCollection::build(&g);

        let mut reachable = BTreeSet::from([0usize]);
        let mut frontier = vec![0usize];
        while let Some(state) = frontier.pop() {
            for (&(from, _), &to) in cc.transitions() {
                if from == state && reachable.insert(to) {
                    frontier.push(to);
                }
            }
        }
        assert_eq!(reachable.len(), cc.state_count());
    }
}
