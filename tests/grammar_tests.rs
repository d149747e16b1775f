use slr_gen::{Grammar, GrammarError, Symbol};

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[test]
fn arithmetic_grammar_classifies_symbols_by_usage_not_spelling() {
    let grammar = Grammar::ingest(&lines(&[
        "E -> E + T | T",
        "T -> T * F | F",
        "F -> ( E ) | id",
    ]))
    .unwrap();

    for nonterminal in ["E", "T", "F"] {
        assert!(grammar.is_nonterminal(&Symbol::new(nonterminal)));
    }
    for terminal in ["+", "*", "(", ")", "id"] {
        assert!(grammar.is_terminal(&Symbol::new(terminal)));
    }
    assert!(grammar.is_terminal(&Symbol::new("#")));
}

#[test]
fn augmented_production_is_always_first() {
    let grammar = Grammar::ingest(&lines(&["S -> a S b | a b"])).unwrap();
    assert_eq!(grammar.production(0).left, *grammar.augmented_start());
    assert_eq!(grammar.production(0).right, vec![Symbol::new("S")]);
}

#[test]
fn missing_arrow_is_a_syntax_error() {
    let err = Grammar::ingest(&lines(&["S : a"])).unwrap_err();
    assert!(matches!(err, GrammarError::GrammarSyntaxError(_)));
}

#[test]
fn empty_grammar_is_rejected() {
    assert!(matches!(
        Grammar::ingest(&[]),
        Err(GrammarError::EmptyGrammar)
    ));
}
