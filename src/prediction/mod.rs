//! Prediction for predictive parsers: FIRST and FOLLOW set computation.

mod first;
mod follow;
mod sets;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::sets::{SymbolSet, TerminalSet};

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// FIRST and FOLLOW sets of every nonterminal, in declaration order.
///
/// Built once per grammar and never modified afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolSets {
    first: FirstSets,
    sets: Vec<SymbolSet>,
}

impl SymbolSets {
    /// Computes FIRST sets, then FOLLOW sets.
    pub fn new(grammar: &Grammar) -> Self {
        let first = FirstSets::new(grammar);
        let follow = FollowSets::new(grammar, &first);
        Self::from_parts(grammar, first, &follow)
    }

    /// Combines precomputed sets into per-nonterminal records.
    pub fn from_parts(grammar: &Grammar, first: FirstSets, follow: &FollowSets) -> Self {
        let sets = grammar
            .nonterminals()
            .iter()
            .enumerate()
            .map(|(row, &symbol)| SymbolSet {
                symbol,
                first: first.row(row).clone(),
                follow: follow.row(row).clone(),
            })
            .collect();
        SymbolSets { first, sets }
    }

    /// Returns the record of a nonterminal.
    pub fn get(&self, grammar: &Grammar, nonterminal: Symbol) -> Option<&SymbolSet> {
        grammar
            .nonterminal_index(nonterminal)
            .and_then(|row| self.sets.get(row))
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn first(&self, grammar: &Grammar, nonterminal: Symbol) -> Option<&TerminalSet> {
        self.get(grammar, nonterminal).map(|set| &set.first)
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow(&self, grammar: &Grammar, nonterminal: Symbol) -> Option<&TerminalSet> {
        self.get(grammar, nonterminal).map(|set| &set.follow)
    }

    /// Calculates a FIRST set for a string of symbols against the final
    /// FIRST sets.
    pub fn first_set_for_string(&self, grammar: &Grammar, string: &[Symbol]) -> TerminalSet {
        self.first.first_set_for_string(grammar, string)
    }

    /// Returns the FIRST sets engine result.
    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    /// Iterates over the records in nonterminal declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolSet> {
        self.sets.iter()
    }
}

/// Shortcuts for computing sets of a grammar.
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FIRST sets, then FOLLOW sets.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from known FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
    /// Computes both kinds of sets as per-nonterminal records.
    fn symbol_sets(&self) -> SymbolSets;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }

    fn symbol_sets(&self) -> SymbolSets {
        SymbolSets::new(self)
    }
}
