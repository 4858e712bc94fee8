//! The LL(1) predictive parse table and the LL grammar class.

use std::collections::BTreeMap;

use bit_vec::BitVec;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::prediction::SymbolSets;
use crate::rule::RuleIndex;
use crate::symbol::Symbol;

/// LL(1) parse table.
///
/// Rows are nonterminals in declaration order. Columns are terminals in
/// declaration order, followed by the end marker. When two rules claim
/// the same cell, the one declared later wins and the clash is recorded
/// in [`conflicts`](Self::conflicts).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LlParseTable {
    nonterminals: Vec<Symbol>,
    columns: Vec<Symbol>,
    cells: Vec<Option<RuleIndex>>,
    conflicts: Vec<Conflict>,
}

/// Two rules that claim the same table cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conflict {
    /// Row of the cell.
    pub nonterminal: Symbol,
    /// Column of the cell: a terminal or the end marker.
    pub lookahead: Symbol,
    /// The rule that was in the cell before.
    pub overwritten: RuleIndex,
    /// The rule that is in the cell now.
    pub winner: RuleIndex,
}

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<Symbol, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl LlParseTable {
    /// Creates an LL parse table from complete FIRST and FOLLOW sets.
    pub fn new(grammar: &Grammar, sets: &SymbolSets) -> Self {
        let num_columns = grammar.num_columns();
        let mut columns = grammar.terminals().to_vec();
        columns.push(grammar.end_marker());
        let mut this = LlParseTable {
            nonterminals: grammar.nonterminals().to_vec(),
            columns,
            cells: vec![None; grammar.nonterminals().len() * num_columns],
            conflicts: vec![],
        };
        let end_column = num_columns - 1;
        // LlParseTable[A,a] contains the rule A → w if and only if
        // a is in FIRST(w) or
        // epsilon is in FIRST(w) and a is in FOLLOW(A).
        for (rule_idx, rule) in grammar.rules().enumerate() {
            let rule_idx = RuleIndex(rule_idx);
            let Some(row) = grammar.nonterminal_index(rule.lhs) else {
                debug_assert!(false, "rule LHS must be a nonterminal");
                continue;
            };
            let rhs_first_set = sets.first_set_for_string(grammar, &rule.rhs[..]);
            for column in rhs_first_set.columns() {
                this.assign(row, column, rule_idx);
            }
            if rhs_first_set.has_none() {
                let Some(lhs_follow_set) = sets.follow(grammar, rule.lhs) else {
                    continue;
                };
                for column in lhs_follow_set.columns() {
                    this.assign(row, column, rule_idx);
                }
                if lhs_follow_set.has_none() {
                    this.assign(row, end_column, rule_idx);
                }
            }
        }
        this
    }

    /// Computes FIRST and FOLLOW sets, then the table.
    pub fn from_grammar(grammar: &Grammar) -> Self {
        Self::new(grammar, &SymbolSets::new(grammar))
    }

    fn assign(&mut self, row: usize, column: usize, rule_idx: RuleIndex) {
        let cell = &mut self.cells[row * self.columns.len() + column];
        if let Some(previous) = *cell {
            if previous != rule_idx {
                let conflict = Conflict {
                    nonterminal: self.nonterminals[row],
                    lookahead: self.columns[column],
                    overwritten: previous,
                    winner: rule_idx,
                };
                debug!(
                    "table cell ({:?}, {:?}): rule {} overwrites rule {}",
                    conflict.nonterminal, conflict.lookahead, rule_idx, previous
                );
                self.conflicts.push(conflict);
            }
        }
        *cell = Some(rule_idx);
    }

    /// Looks up the rule to apply for `nonterminal` when the next input
    /// symbol is `lookahead`, a terminal or the end marker.
    pub fn get(&self, nonterminal: Symbol, lookahead: Symbol) -> Option<RuleIndex> {
        let row = self.row_index(nonterminal)?;
        let column = self.column_index(lookahead)?;
        self.cell(row, column)
    }

    /// Returns the cell at the given dense position.
    pub fn cell(&self, row: usize, column: usize) -> Option<RuleIndex> {
        if column >= self.columns.len() {
            return None;
        }
        self.cells
            .get(row * self.columns.len() + column)
            .copied()
            .flatten()
    }

    /// Returns the cells of a nonterminal's row.
    pub fn row(&self, nonterminal: Symbol) -> Option<&[Option<RuleIndex>]> {
        let row = self.row_index(nonterminal)?;
        let width = self.columns.len();
        self.cells.get(row * width..(row + 1) * width)
    }

    /// Returns the row labels.
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals[..]
    }

    /// Returns the column labels: terminals, then the end marker.
    pub fn columns(&self) -> &[Symbol] {
        &self.columns[..]
    }

    /// Returns every overwrite that happened while filling the table,
    /// in order of occurrence.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts[..]
    }

    /// Whether no cell was claimed by two rules.
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    fn row_index(&self, nonterminal: Symbol) -> Option<usize> {
        // Declaration order is symbol ID order.
        self.nonterminals.binary_search(&nonterminal).ok()
    }

    fn column_index(&self, lookahead: Symbol) -> Option<usize> {
        let (end_marker, terminals) = self.columns.split_last()?;
        if lookahead == *end_marker {
            Some(terminals.len())
        } else {
            terminals.binary_search(&lookahead).ok()
        }
    }

    /// Classifies nonterminals as LL(1) or context-free.
    ///
    /// A nonterminal is context-free if its row has a conflict, or if one of
    /// its rules refers to a context-free nonterminal.
    pub fn classify(&self, grammar: &Grammar) -> LlClassification {
        let mut property = BitVec::from_elem(self.nonterminals.len(), false);
        for conflict in &self.conflicts {
            if let Some(row) = self.row_index(conflict.nonterminal) {
                property.set(row, true);
            }
        }
        grammar.rhs_closure_for_any(&mut property);
        let classes = self
            .nonterminals
            .iter()
            .zip(property.iter())
            .map(|(&nonterminal, context_free)| {
                let class = if context_free {
                    LlNonterminalClass::ContextFree
                } else {
                    LlNonterminalClass::Ll1
                };
                (nonterminal, class)
            })
            .collect();
        LlClassification { classes }
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<Symbol, LlNonterminalClass> {
        &self.classes
    }

    /// Returns the class of a nonterminal.
    pub fn class(&self, nonterminal: Symbol) -> Option<LlNonterminalClass> {
        self.classes.get(&nonterminal).copied()
    }
}
