#![allow(dead_code)]

use std::collections::HashMap;

use cfg_ll1::{Grammar, GrammarBuilder, Symbol, SymbolSets, TerminalSet};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a grammar from symbol names. `#` in a RHS is the epsilon marker.
pub fn grammar(nonterminals: &[&str], terminals: &[&str], rules: &[(&str, &[&str])]) -> Grammar {
    init_logger();
    let mut builder = GrammarBuilder::new();
    let mut by_name = HashMap::new();
    by_name.insert("#", builder.epsilon());
    for &name in nonterminals {
        by_name.insert(name, builder.nonterminal(name));
    }
    for &name in terminals {
        by_name.insert(name, builder.terminal(name));
    }
    for &(lhs, rhs) in rules {
        let rhs: Vec<Symbol> = rhs.iter().map(|name| by_name[name]).collect();
        builder.rule(by_name[lhs]).rhs(rhs);
    }
    builder.build().unwrap()
}

/// `S → a S b | ε`
pub fn balanced() -> Grammar {
    grammar(
        &["S"],
        &["a", "b"],
        &[("S", &["a", "S", "b"]), ("S", &["#"])],
    )
}

/// `E → T E'; E' → + T E' | ε; T → id`
pub fn expression() -> Grammar {
    grammar(
        &["E", "E'", "T"],
        &["+", "id"],
        &[
            ("E", &["T", "E'"]),
            ("E'", &["+", "T", "E'"]),
            ("E'", &["#"]),
            ("T", &["id"]),
        ],
    )
}

/// `start → a x b | c; b → a a | a c; c → x | y; a → ε`
pub fn nullable_prefix() -> Grammar {
    grammar(
        &["start", "a", "b", "c"],
        &["x", "y"],
        &[
            ("start", &["a", "x", "b"]),
            ("start", &["c"]),
            ("b", &["a", "a"]),
            ("b", &["a", "c"]),
            ("c", &["x"]),
            ("c", &["y"]),
            ("a", &[]),
        ],
    )
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar.symbol_by_name(name).unwrap()
}

pub fn syms(grammar: &Grammar, names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|name| sym(grammar, name)).collect()
}

/// Concatenates member names in set order.
pub fn stringify(grammar: &Grammar, set: &TerminalSet, sentinel: Symbol) -> String {
    set.symbols(grammar, sentinel)
        .map(|sym| grammar.name(sym).unwrap())
        .collect()
}

pub fn first(grammar: &Grammar, sets: &SymbolSets, name: &str) -> String {
    let set = sets.first(grammar, sym(grammar, name)).unwrap();
    stringify(grammar, set, grammar.epsilon())
}

pub fn follow(grammar: &Grammar, sets: &SymbolSets, name: &str) -> String {
    let set = sets.follow(grammar, sym(grammar, name)).unwrap();
    stringify(grammar, set, grammar.end_marker())
}
