//! FOLLOW sets.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::prediction::{FirstSets, TerminalSet};
use crate::symbol::Symbol;

/// FOLLOW sets of all nonterminals, indexed by nonterminal row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminal rows to FOLLOW sets.
    map: Vec<TerminalSet>,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// `first_sets` must be complete.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets::empty(grammar);
        let mut passes = 1;
        while this.pass(grammar, first_sets) {
            trace!("FOLLOW pass {} changed some sets", passes);
            passes += 1;
        }
        debug!("FOLLOW sets stable after {} passes", passes);
        this
    }

    /// Creates the starting approximation: the end marker follows the
    /// start symbol, all other sets are empty.
    pub fn empty(grammar: &Grammar) -> Self {
        let mut map =
            vec![TerminalSet::new(grammar.terminals().len()); grammar.nonterminals().len()];
        if let Some(row) = grammar.nonterminal_index(grammar.start_symbol()) {
            map[row].insert_none();
        }
        FollowSets { map }
    }

    /// Runs one pass over the rules. Returns `true` if any set grew.
    ///
    /// Each RHS is walked backwards, carrying the set of symbols that may
    /// come after the current position.
    pub fn pass(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            let Some(lhs_row) = grammar.nonterminal_index(rule.lhs) else {
                debug_assert!(false, "rule LHS must be a nonterminal");
                continue;
            };
            let mut follow_set = self.map[lhs_row].clone();

            for &sym in rule.rhs.iter().rev() {
                if let Some(column) = grammar.terminal_index(sym) {
                    follow_set = TerminalSet::new(grammar.terminals().len());
                    follow_set.insert(column);
                } else if let Some(row) = grammar.nonterminal_index(sym) {
                    changed |= self.map[row].union(&follow_set);

                    let first_set = first_sets.row(row);
                    if !first_set.has_none() {
                        follow_set = TerminalSet::new(grammar.terminals().len());
                    }
                    follow_set.union_terminals(first_set);
                }
            }
        }
        changed
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn get(&self, grammar: &Grammar, nonterminal: Symbol) -> Option<&TerminalSet> {
        grammar
            .nonterminal_index(nonterminal)
            .and_then(|row| self.map.get(row))
    }

    /// Returns the FOLLOW set of the nonterminal at the given row.
    pub fn row(&self, row: usize) -> &TerminalSet {
        &self.map[row]
    }

    /// Returns all sets, indexed by nonterminal row.
    pub fn rows(&self) -> &[TerminalSet] {
        &self.map[..]
    }
}
