use slr_gen::Symbol;

#[test]
fn symbols_with_the_same_text_are_equal() {
    assert_eq!(Symbol::new("Expr"), Symbol::new("Expr"));
    assert_ne!(Symbol::new("Expr"), Symbol::new("Term"));
}

#[test]
fn markers_round_trip_through_display() {
    assert_eq!(Symbol::epsilon().to_string(), "ε");
    assert_eq!(Symbol::end_marker().to_string(), "#");
}
