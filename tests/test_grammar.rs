mod support;

use cfg_ll1::{
    BuildError, GrammarBuilder, GrammarConfig, Limits, LlParseTable, Rule, SymbolKind, SymbolSets,
};
use test_case::test_case;

#[test]
fn test_declaration_order_and_kinds() {
    let grammar = support::expression();
    let names = |syms: &[cfg_ll1::Symbol]| {
        syms.iter()
            .map(|&sym| grammar.name(sym).unwrap().to_owned())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(grammar.nonterminals()), ["E", "E'", "T"]);
    assert_eq!(names(grammar.terminals()), ["+", "id"]);
    assert_eq!(grammar.start_symbol(), support::sym(&grammar, "E"));
    assert_eq!(grammar.kind(grammar.epsilon()), Some(SymbolKind::Epsilon));
    assert_eq!(grammar.kind(grammar.end_marker()), Some(SymbolKind::EndMarker));
    assert_eq!(grammar.name(grammar.epsilon()), Some("#"));
    assert_eq!(grammar.name(grammar.end_marker()), Some("$"));

    let t = support::sym(&grammar, "T");
    let id = support::sym(&grammar, "id");
    assert_eq!(grammar.nonterminal_index(t), Some(2));
    assert_eq!(grammar.terminal_index(id), Some(1));
    assert_eq!(grammar.nonterminal_index(id), None);
    assert_eq!(grammar.column(grammar.end_marker()), Some(2));
    assert_eq!(grammar.num_columns(), 3);
}

#[test]
fn test_epsilon_rhs_is_empty_rhs() {
    let mut builder = GrammarBuilder::new();
    let [s] = builder.nonterminals(["S"]);
    let [a] = builder.terminals(["a"]);
    let eps = builder.epsilon();
    builder.rule(s).rhs([eps]).rhs([]).rhs([a, eps]);
    let grammar = builder.build().unwrap();

    let rules: Vec<&Rule> = grammar.rules().collect();
    assert_eq!(grammar.num_rules(), 3);
    assert!(rules[0].is_empty());
    assert_eq!(rules[0], rules[1]);
    assert_eq!(rules[2].rhs, [a]);
    assert_eq!(grammar.rules_for(s).count(), 3);
}

#[test]
fn test_redeclaring_same_kind_returns_same_symbol() {
    let mut builder = GrammarBuilder::new();
    let first = builder.terminal("a");
    let second = builder.terminal("a");
    assert_eq!(first, second);
}

#[test]
fn test_no_rules() {
    let mut builder = GrammarBuilder::new();
    builder.nonterminal("S");
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_no_nonterminals() {
    let mut builder = GrammarBuilder::new();
    builder.terminal("a");
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_terminal_on_lhs() {
    let mut builder = GrammarBuilder::new();
    builder.nonterminal("S");
    let a = builder.terminal("a");
    builder.rule(a).rhs([a]);
    let err = builder.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed grammar: rule 0 has `a` on its left-hand side, which is not a nonterminal"
    );
}

#[test]
fn test_end_marker_on_rhs() {
    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    let end = builder.end_marker();
    builder.rule(s).rhs([end]);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_foreign_symbol() {
    let mut other = GrammarBuilder::new();
    let [_, _, foreign] = other.terminals(["x", "y", "z"]);

    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    builder.rule(s).rhs([foreign]);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_foreign_symbol_with_local_id() {
    // `x` has the same ID as `S` below.
    let mut other = GrammarBuilder::new();
    let foreign_x = other.terminal("x");

    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    assert_eq!(foreign_x.usize(), s.usize());
    assert_ne!(foreign_x, s);
    builder.rule(s).rhs([foreign_x]);
    assert_eq!(
        builder.build().unwrap_err().to_string(),
        "malformed grammar: rule 0 has an undeclared symbol on its right-hand side"
    );
}

#[test]
fn test_foreign_nonterminal_on_lhs() {
    let mut other = GrammarBuilder::new();
    let foreign_s = other.nonterminal("S");

    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    builder.rule(foreign_s).rhs([]);
    builder.rule(s).rhs([]);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_foreign_start_symbol() {
    let mut other = GrammarBuilder::new();
    let foreign_s = other.nonterminal("S");

    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    builder.rule(s).rhs([]);
    builder.set_start(foreign_s);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_lookups_of_foreign_symbols() {
    let grammar = support::balanced();
    let other = support::expression();
    let foreign = support::sym(&other, "T");

    assert_eq!(grammar.kind(foreign), None);
    assert_eq!(grammar.name(foreign), None);
    assert!(!grammar.is_nonterminal(foreign));
    assert!(!grammar.is_terminal(foreign));
    assert_eq!(grammar.nonterminal_index(foreign), None);
    assert_eq!(grammar.column(foreign), None);

    let sets = SymbolSets::new(&grammar);
    assert_eq!(sets.first(&grammar, foreign), None);
    assert_eq!(sets.follow(&grammar, foreign), None);
    assert!(sets.first_set_for_string(&grammar, &[foreign]).is_empty());
    let table = LlParseTable::new(&grammar, &sets);
    assert_eq!(table.get(foreign, grammar.end_marker()), None);
    assert_eq!(table.row(foreign), None);
}

#[test]
fn test_name_clash_between_kinds() {
    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    builder.terminal("S");
    builder.rule(s).rhs([]);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test]
fn test_start_must_be_nonterminal() {
    let mut builder = GrammarBuilder::new();
    let s = builder.nonterminal("S");
    let a = builder.terminal("a");
    builder.rule(s).rhs([a]);
    builder.set_start(a);
    assert!(matches!(builder.build(), Err(BuildError::Malformed { .. })));
}

#[test_case(2, 100, "symbols", 3 ; "too many symbols")]
#[test_case(100, 1, "rules", 2 ; "too many rules")]
fn test_capacity(max_symbols: usize, max_rules: usize, what: &str, requested: usize) {
    let config = GrammarConfig {
        limits: Limits {
            max_symbols,
            max_rules,
        },
        ..GrammarConfig::default()
    };
    let mut builder = GrammarBuilder::with_config(config);
    let [s] = builder.nonterminals(["S"]);
    let [a, b] = builder.terminals(["a", "b"]);
    builder.rule(s).rhs([a]).rhs([b]);

    match builder.build() {
        Err(BuildError::Capacity {
            what: actual_what,
            limit,
            requested: actual_requested,
        }) => {
            assert_eq!(actual_what, what);
            assert_eq!(actual_requested, requested);
            assert!(limit < requested);
        }
        other => panic!("expected a capacity error, got {:?}", other.map(|_| ())),
    }
}
