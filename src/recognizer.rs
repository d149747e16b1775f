//! Recognizer: the table-driven shift-reduce automaton. Consumes a
//! tokenized input sentence against an already-built `ParsingTables` and
//! emits a step-by-step trace.

use crate::error::{GrammarError, Result};
use crate::grammar::Grammar;
use crate::symbol::{symbols_to_string, tokens_to_symbols, Symbol};
use crate::table::{ActionEntry, ParsingTables};
use std::fmt;

/// The action recorded for one recognizer step.
#[derive(Debug, Clone)]
pub enum StepAction {
    Shift(usize),
    Reduce(usize),
    Accept,
    Reject,
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepAction::Shift(state) => write!(f, "shift to {state}"),
            StepAction::Reduce(production) => write!(f, "reduce by production {production}"),
            StepAction::Accept => write!(f, "accept"),
            StepAction::Reject => write!(f, "reject"),
        }
    }
}

/// One line of recognizer output: step number, a snapshot of the state
/// stack, the remaining input (inclusive of the trailing `#`), and the
/// action taken.
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub step: usize,
    pub stack: Vec<usize>,
    pub remaining_input: Vec<Symbol>,
    pub action: StepAction,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = self
            .stack
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            f,
            "{}: stack=[{stack}] input=[{}] action={}",
            self.step,
            symbols_to_string(&self.remaining_input),
            self.action
        )
    }
}

/// The outcome of recognition, distinct from `GrammarError`: a rejected
/// sentence is an ordinary parse result, not a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
}

/// A full recognition run: its outcome and the trace that produced it.
#[derive(Debug)]
pub struct Recognition {
    pub outcome: Outcome,
    pub trace: Vec<TraceStep>,
}

/// Validates every token against the terminal set, appends `#`, and
/// drives the shift-reduce automaton to completion.
pub fn recognize(grammar: &Grammar, tables: &ParsingTables, tokens: &[String]) -> Result<Recognition> {
    let symbols: Vec<Symbol> = tokens_to_symbols(tokens);

    let undefined: Vec<&Symbol> = symbols.iter().filter(|s| !grammar.is_terminal(s)).collect();
    if !undefined.is_empty() {
        return Err(GrammarError::UndefinedInputSymbol {
            symbols: symbols_to_string(&undefined.into_iter().cloned().collect::<Vec<_>>()),
            valid_terminals: symbols_to_string(
                &grammar.terminals().iter().cloned().collect::<Vec<_>>(),
            ),
        });
    }

    let mut input = symbols;
    input.push(Symbol::end_marker());

    let mut stack: Vec<usize> = vec![0];
    let mut cursor = 0usize;
    let mut trace = Vec::new();
    let mut step = 0usize;

    loop {
        let state = *stack.last().expect("stack is never empty");
        let lookahead = &input[cursor];
        let remaining_input = input[cursor..].to_vec();

        match tables.action.get(state, lookahead) {
            Some(ActionEntry::Shift(target)) => {
                stack.push(target);
                cursor += 1;
                trace.push(TraceStep {
                    step,
                    stack: stack.clone(),
                    remaining_input,
                    action: StepAction::Shift(target),
                });
            }
            Some(ActionEntry::Reduce(production_index)) => {
                let production = grammar.production(production_index);
                let pop_count = production.right.len();
                let new_len = stack.len() - pop_count;
                stack.truncate(new_len);

                let state_below = *stack.last().expect("stack is never empty");
                match tables.goto.get(state_below, &production.left) {
                    Some(target) => {
                        stack.push(target);
                        trace.push(TraceStep {
                            step,
                            stack: stack.clone(),
                            remaining_input,
                            action: StepAction::Reduce(production_index),
                        });
                    }
                    None => {
                        trace.push(TraceStep {
                            step,
                            stack: stack.clone(),
                            remaining_input,
                            action: StepAction::Reject,
                        });
                        return Ok(Recognition {
                            outcome: Outcome::Reject,
                            trace,
                        });
                    }
                }
            }
            Some(ActionEntry::Accept) => {
                trace.push(TraceStep {
                    step,
                    stack: stack.clone(),
                    remaining_input,
                    action: StepAction::Accept,
                });
                return Ok(Recognition {
                    outcome: Outcome::Accept,
                    trace,
                });
            }
            None => {
                trace.push(TraceStep {
                    step,
                    stack: stack.clone(),
                    remaining_input,
                    action: StepAction::Reject,
                });
                return Ok(Recognition {
                    outcome: Outcome::Reject,
                    trace,
                });
            }
        }

        step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CanonicalCollection;
    use crate::first_follow::{compute_first_sets, compute_follow_sets};
    use crate::table::select_and_build;

    fn recognize_tokens(lines: &[&str], sentence: &[&str]) -> Result<Recognition> {
        let g = Grammar::ingest(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())?;
        let cc = CanonicalCollection::build(&g);
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        let tables = select_and_build(&g, &cc, &follow)?;
        let tokens: Vec<String> = sentence.iter().map(|s| s.to_string()).collect();
        recognize(&g, &tables, &tokens)
    }

    #[test]
    fn accepts_well_formed_arithmetic_expression() {
        let lines = ["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"];
        let result = recognize_tokens(&lines, &["id", "+", "id", "*", "id"]).unwrap();
        assert_eq!(result.outcome, Outcome::Accept);
    }

    #[test]
    fn rejects_malformed_arithmetic_expression() {
        let lines = ["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"];
        let result = recognize_tokens(&lines, &["id", "+", "+"]).unwrap();
        assert_eq!(result.outcome, Outcome::Reject);
    }

    #[test]
    fn accepts_pure_lr0_grammar() {
        let lines = ["S -> a S b | a b"];
        assert_eq!(
            recognize_tokens(&lines, &["a", "a", "b", "b"]).unwrap().outcome,
            Outcome::Accept
        );
        assert_eq!(
            recognize_tokens(&lines, &["a", "a", "b"]).unwrap().outcome,
            Outcome::Reject
        );
    }

    #[test]
    fn accepts_epsilon_production_grammar() {
        let lines = ["S -> A B", "A -> a | ε", "B -> b"];
        assert_eq!(recognize_tokens(&lines, &["a", "b"]).unwrap().outcome, Outcome::Accept);
        assert_eq!(recognize_tokens(&lines, &["b"]).unwrap().outcome, Outcome::Accept);
    }

    #[test]
    fn rejects_empty_input() {
        let lines = ["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"];
        assert_eq!(recognize_tokens(&lines, &[]).unwrap().outcome, Outcome::Reject);
    }

    #[test]
    fn unknown_symbol_is_a_grammar_error_not_a_rejection() {
        let lines = ["E -> E + T | T", "T -> T * F | F", "F -> ( E ) | id"];
        let err = recognize_tokens(&lines, &["id", "+", "x"]).unwrap_err();
        assert!(matches!(err, GrammarError::UndefinedInputSymbol { .. }));
    }
}
