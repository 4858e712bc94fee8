//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs.

mod repr;
pub mod source;

pub use self::repr::Symbol;
use self::repr::SymbolRepr;
pub use self::source::SymbolSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The role a symbol plays in a grammar.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolKind {
    /// Appears literally in the language. Never expanded.
    Terminal,
    /// Expanded by production rules.
    Nonterminal,
    /// Stands for the empty string.
    Epsilon,
    /// Stands for the end of input.
    EndMarker,
}

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}
