//! FIRST and FOLLOW sets of context-free grammars, and the LL(1) predictive
//! parse table built from them.
//!
//! A [`Grammar`] is assembled with a [`GrammarBuilder`], then analysed in
//! stages, each a pure function of the previous results:
//!
//! ```
//! use cfg_ll1::{GrammarBuilder, LlParseTable, Report, SymbolSets};
//!
//! let mut builder = GrammarBuilder::new();
//! let [s] = builder.nonterminals(["S"]);
//! let [a, b] = builder.terminals(["a", "b"]);
//! let eps = builder.epsilon();
//! builder.rule(s).rhs([a, s, b]).rhs([eps]);
//! let grammar = builder.build().unwrap();
//!
//! let sets = SymbolSets::new(&grammar);
//! let table = LlParseTable::new(&grammar, &sets);
//! assert_eq!(table.get(s, grammar.end_marker()).map(|idx| idx.usize()), Some(1));
//! println!("{}", Report::new(&grammar, &sets, &table));
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod classification;
pub mod error;
mod grammar;
pub mod prediction;
pub mod report;
pub mod rule;
pub mod symbol;

pub use crate::classification::{Conflict, LlClassification, LlNonterminalClass, LlParseTable};
pub use crate::error::BuildError;
pub use crate::grammar::{Grammar, GrammarBuilder, GrammarConfig, Limits};
pub use crate::prediction::{
    FirstSets, FollowSets, GrammarSetsExt, SymbolSet, SymbolSets, TerminalSet,
};
pub use crate::report::Report;
pub use crate::rule::{Rule, RuleIndex};
pub use crate::symbol::{Symbol, SymbolKind};
