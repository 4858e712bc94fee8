//! Textual rendering of FIRST/FOLLOW sets and the parse table.
//!
//! The output is stable and meant for exact comparison in tests:
//!
//! ```text
//! First set[S] : a#
//! Follow set[S] : b$
//! 	a	b	$
//! S	S->aSb	S->#	S->#
//! ```

use std::fmt::{self, Write};

use crate::classification::LlParseTable;
use crate::grammar::Grammar;
use crate::prediction::{SymbolSets, TerminalSet};
use crate::rule::RuleIndex;
use crate::symbol::Symbol;

/// Placeholder for an empty table cell.
pub const EMPTY_CELL: &str = "-";

/// Renders the analysis results of one grammar.
#[derive(Clone, Copy)]
pub struct Report<'a> {
    grammar: &'a Grammar,
    sets: &'a SymbolSets,
    table: &'a LlParseTable,
}

impl<'a> Report<'a> {
    /// Creates a report.
    pub fn new(grammar: &'a Grammar, sets: &'a SymbolSets, table: &'a LlParseTable) -> Self {
        Report {
            grammar,
            sets,
            table,
        }
    }

    /// One `First set[A] : ...` line per nonterminal.
    pub fn first_lines(&self) -> String {
        let mut result = String::new();
        for set in self.sets.iter() {
            let members = self.members(&set.first, self.grammar.epsilon());
            writeln!(
                &mut result,
                "First set[{}] : {}",
                self.name(set.symbol),
                members
            )
            .expect("writing to String failed");
        }
        result
    }

    /// One `Follow set[A] : ...` line per nonterminal.
    pub fn follow_lines(&self) -> String {
        let mut result = String::new();
        for set in self.sets.iter() {
            let members = self.members(&set.follow, self.grammar.end_marker());
            writeln!(
                &mut result,
                "Follow set[{}] : {}",
                self.name(set.symbol),
                members
            )
            .expect("writing to String failed");
        }
        result
    }

    /// The table grid, tab-separated, header line first.
    pub fn table_text(&self) -> String {
        let mut result = String::new();
        for &column in self.table.columns() {
            result.push('\t');
            result.push_str(self.name(column));
        }
        result.push('\n');
        for &nonterminal in self.table.nonterminals() {
            result.push_str(self.name(nonterminal));
            if let Some(cells) = self.table.row(nonterminal) {
                for &cell in cells {
                    result.push('\t');
                    match cell {
                        Some(rule_idx) => result.push_str(&self.stringify_rule(rule_idx)),
                        None => result.push_str(EMPTY_CELL),
                    }
                }
            }
            result.push('\n');
        }
        result
    }

    /// Formats a rule as `lhs->rhs`, with the epsilon marker standing for
    /// an empty RHS.
    pub fn stringify_rule(&self, rule_idx: RuleIndex) -> String {
        let rule = self.grammar.rule(rule_idx);
        let rhs = if rule.rhs.is_empty() {
            self.name(self.grammar.epsilon()).to_owned()
        } else {
            rule.rhs
                .iter()
                .map(|&sym| self.name(sym))
                .collect::<String>()
        };
        format!("{}->{}", self.name(rule.lhs), rhs)
    }

    /// Symbols of another grammar render as nothing.
    fn name(&self, sym: Symbol) -> &'a str {
        self.grammar.name(sym).unwrap_or("")
    }

    fn members(&self, set: &TerminalSet, sentinel: Symbol) -> String {
        set.symbols(self.grammar, sentinel)
            .map(|sym| self.name(sym))
            .collect()
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.first_lines())?;
        f.write_str(&self.follow_lines())?;
        f.write_str(&self.table_text())
    }
}
