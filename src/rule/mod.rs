//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side. Rules are numbered in declaration order.

pub mod builder;
pub mod container;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Position of a rule in the grammar's declaration order.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleIndex(pub usize);

impl RuleIndex {
    /// Cast the index to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typical grammar rule representation.
///
/// An empty `rhs` is the epsilon production.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// The rule's left-hand side.
    pub lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: Vec<Symbol>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Rule { lhs, rhs }
    }

    /// Whether this is an epsilon production.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}
