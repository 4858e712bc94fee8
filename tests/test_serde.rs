#![cfg(feature = "serde")]

mod support;

use cfg_ll1::{LlParseTable, SymbolSets};

use support::sym;

#[test]
fn test_table_through_json() {
    let grammar = support::nullable_prefix();
    let table = LlParseTable::from_grammar(&grammar);
    let json = serde_json::to_string(&table).unwrap();
    let restored: LlParseTable = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, table);
    for &nonterminal in table.nonterminals() {
        for &lookahead in table.columns() {
            assert_eq!(
                restored.get(nonterminal, lookahead),
                table.get(nonterminal, lookahead)
            );
        }
        assert_eq!(restored.row(nonterminal), table.row(nonterminal));
    }
    assert_eq!(restored.conflicts(), table.conflicts());
    assert!(!restored.is_ll1());
}

#[test]
fn test_sets_through_json() {
    let grammar = support::expression();
    let sets = SymbolSets::new(&grammar);
    let records: Vec<_> = sets.iter().cloned().collect();
    let json = serde_json::to_string(&records).unwrap();
    let restored: Vec<cfg_ll1::SymbolSet> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, records);
}

#[test]
fn test_truncated_table_does_not_panic() {
    let grammar = support::balanced();
    let table = LlParseTable::from_grammar(&grammar);
    let mut value = serde_json::to_value(&table).unwrap();
    value["cells"].as_array_mut().unwrap().pop();
    let truncated: LlParseTable = serde_json::from_value(value).unwrap();

    let s = sym(&grammar, "S");
    assert_eq!(truncated.row(s), None);
    assert_eq!(truncated.get(s, sym(&grammar, "a")), table.get(s, sym(&grammar, "a")));
    assert_eq!(truncated.get(s, grammar.end_marker()), None);
}
