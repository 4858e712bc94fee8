//! FIRST sets.

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::prediction::TerminalSet;
use crate::symbol::{Symbol, SymbolKind};

/// FIRST sets of all nonterminals, indexed by nonterminal row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: Vec<TerminalSet>,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the least fixed point by repeating passes over all rules
    /// until a pass changes nothing.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets::empty(grammar);
        let mut passes = 1;
        while this.pass(grammar) {
            trace!("FIRST pass {} changed some sets", passes);
            passes += 1;
        }
        debug!("FIRST sets stable after {} passes", passes);
        this
    }

    /// Creates the starting approximation, in which every set is empty.
    pub fn empty(grammar: &Grammar) -> Self {
        FirstSets {
            map: vec![TerminalSet::new(grammar.terminals().len()); grammar.nonterminals().len()],
        }
    }

    /// Runs one pass over the rules. Returns `true` if any set grew.
    ///
    /// Sets only ever grow.
    pub fn pass(&mut self, grammar: &Grammar) -> bool {
        let mut changed = false;
        for rule in grammar.rules() {
            let Some(row) = grammar.nonterminal_index(rule.lhs) else {
                debug_assert!(false, "rule LHS must be a nonterminal");
                continue;
            };
            let lookahead = self.first_set_for_string(grammar, &rule.rhs[..]);
            changed |= self.map[row].union(&lookahead);
        }
        changed
    }

    /// Calculates a FIRST set for a string of symbols. The sentinel of the
    /// result is epsilon.
    ///
    /// Epsilon markers in `string` are skipped. A symbol that does not
    /// belong to `grammar` ends the string without adding anything.
    pub fn first_set_for_string(&self, grammar: &Grammar, string: &[Symbol]) -> TerminalSet {
        let mut result = TerminalSet::new(grammar.terminals().len());
        for &sym in string {
            match grammar.kind(sym) {
                Some(SymbolKind::Terminal) => {
                    if let Some(column) = grammar.terminal_index(sym) {
                        result.insert(column);
                    }
                    return result;
                }
                Some(SymbolKind::Nonterminal) => {
                    let Some(first_set) = self.get(grammar, sym) else {
                        return result;
                    };
                    result.union_terminals(first_set);
                    if !first_set.has_none() {
                        return result;
                    }
                }
                Some(SymbolKind::Epsilon) => {}
                // Not a symbol of this grammar.
                None => return result,
                Some(SymbolKind::EndMarker) => {
                    debug_assert!(false, "end marker inside a symbol string");
                    return result;
                }
            }
        }
        result.insert_none();
        result
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn get(&self, grammar: &Grammar, nonterminal: Symbol) -> Option<&TerminalSet> {
        grammar
            .nonterminal_index(nonterminal)
            .and_then(|row| self.map.get(row))
    }

    /// Returns the FIRST set of the nonterminal at the given row.
    pub fn row(&self, row: usize) -> &TerminalSet {
        &self.map[row]
    }

    /// Returns all sets, indexed by nonterminal row.
    pub fn rows(&self) -> &[TerminalSet] {
        &self.map[..]
    }
}
