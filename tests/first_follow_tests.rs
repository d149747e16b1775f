use slr_gen::Grammar;
use slr_gen::Symbol;
use std::collections::HashSet;

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[test]
fn epsilon_production_grammar_first_and_follow() {
    let grammar = Grammar::ingest(&lines(&["S -> A B", "A -> a | ε", "B -> b"])).unwrap();
    let first = slr_gen::first_follow::compute_first_sets(&grammar);
    let follow = slr_gen::first_follow::compute_follow_sets(&grammar, &first);

    let first_a = first.get(&Symbol::new("A")).unwrap();
    assert_eq!(
        first_a,
        &HashSet::from([Symbol::new("a"), Symbol::epsilon()])
    );

    let first_b = first.get(&Symbol::new("B")).unwrap();
    assert_eq!(first_b, &HashSet::from([Symbol::new("b")]));

    let follow_a = follow.get(&Symbol::new("A")).unwrap();
    assert_eq!(follow_a, &HashSet::from([Symbol::new("b")]));
}
