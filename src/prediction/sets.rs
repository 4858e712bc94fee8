//! The representation of FIRST and FOLLOW sets.

use bit_vec::BitVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// A set of terminals, plus one sentinel.
///
/// In a FIRST set the sentinel stands for epsilon. In a FOLLOW set it
/// stands for the end of input.
///
/// Iteration yields terminals in declaration order, then the sentinel.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminalSet {
    terminals: BitVec,
    has_none: bool,
}

impl TerminalSet {
    /// Creates an empty set over `num_terminals` columns.
    pub fn new(num_terminals: usize) -> Self {
        TerminalSet {
            terminals: BitVec::from_elem(num_terminals, false),
            has_none: false,
        }
    }

    /// Whether the sentinel is in the set.
    #[inline]
    pub fn has_none(&self) -> bool {
        self.has_none
    }

    /// Adds the sentinel. Returns `true` if it was absent.
    pub fn insert_none(&mut self) -> bool {
        let changed = !self.has_none;
        self.has_none = true;
        changed
    }

    /// Whether the terminal at the given column is in the set.
    #[inline]
    pub fn contains(&self, column: usize) -> bool {
        self.terminals.get(column).unwrap_or(false)
    }

    /// Adds the terminal at the given column. Returns `true` if it was
    /// absent.
    pub fn insert(&mut self, column: usize) -> bool {
        let changed = !self.terminals[column];
        self.terminals.set(column, true);
        changed
    }

    /// Adds every terminal of `other`, leaving the sentinel alone.
    /// Returns `true` if anything was added.
    pub fn union_terminals(&mut self, other: &TerminalSet) -> bool {
        self.terminals.or(&other.terminals)
    }

    /// Adds every member of `other`, the sentinel included.
    /// Returns `true` if anything was added.
    pub fn union(&mut self, other: &TerminalSet) -> bool {
        let mut changed = self.union_terminals(other);
        if other.has_none {
            changed |= self.insert_none();
        }
        changed
    }

    /// Returns the number of members, the sentinel included.
    pub fn len(&self) -> usize {
        self.terminals.iter().filter(|&bit| bit).count() + self.has_none as usize
    }

    /// Whether the set has no members at all.
    pub fn is_empty(&self) -> bool {
        !self.has_none && self.terminals.none()
    }

    /// Whether every member of `self` is in `other`.
    pub fn is_subset(&self, other: &TerminalSet) -> bool {
        (!self.has_none || other.has_none)
            && self
                .terminals
                .iter()
                .zip(other.terminals.iter())
                .all(|(mine, theirs)| !mine || theirs)
    }

    /// Iterates over the columns of the terminals in the set.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.terminals
            .iter()
            .enumerate()
            .filter_map(|(column, bit)| if bit { Some(column) } else { None })
    }

    /// Iterates over the members as symbols of `grammar`, with `sentinel`
    /// standing for the sentinel.
    pub fn symbols<'a>(
        &'a self,
        grammar: &'a Grammar,
        sentinel: Symbol,
    ) -> impl Iterator<Item = Symbol> + 'a {
        self.columns()
            .map(move |column| grammar.terminals()[column])
            .chain(if self.has_none { Some(sentinel) } else { None })
    }
}

/// FIRST and FOLLOW sets of one nonterminal.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolSet {
    /// The nonterminal.
    pub symbol: Symbol,
    /// FIRST set. The sentinel is epsilon.
    pub first: TerminalSet,
    /// FOLLOW set. The sentinel is the end marker.
    pub follow: TerminalSet,
}
