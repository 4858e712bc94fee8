//! Source

use std::collections::HashMap;

use crate::symbol::repr::{fresh_origin, SymbolRepr, FIRST_ID, NULL_ID};
use crate::symbol::{Symbol, SymbolKind};

/// A source of numeric symbols.
///
/// Every generated symbol carries a name and a kind. IDs are consecutive,
/// so the order of IDs is the order of declaration. Symbols of another
/// source are never contained in this one, even when their IDs are in range.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    origin: SymbolRepr,
    next_id: SymbolRepr,
    names: Vec<String>,
    kinds: Vec<SymbolKind>,
    by_name: HashMap<String, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self {
            origin: fresh_origin(),
            next_id: FIRST_ID,
            names: vec![],
            kinds: vec![],
            by_name: HashMap::new(),
        }
    }

    /// Generates a new unique symbol with the given name and kind.
    ///
    /// Returns `None` if the name is already taken.
    pub fn next_sym(&mut self, name: &str, kind: SymbolKind) -> Option<Symbol> {
        if self.by_name.contains_key(name) {
            return None;
        }
        let ret = Symbol::new(self.origin, self.next_id);
        self.next_id += 1;
        debug_assert_ne!(self.next_id, NULL_ID, "ran out of Symbol space?");
        self.names.push(name.to_owned());
        self.kinds.push(kind);
        self.by_name.insert(name.to_owned(), ret);
        Some(ret)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }

    /// Whether the symbol was generated by this source.
    pub fn contains(&self, sym: Symbol) -> bool {
        sym.origin() == self.origin && sym.usize() < self.num_syms()
    }

    /// Returns the name of a symbol, or `None` for a symbol of another
    /// source.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        if !self.contains(sym) {
            return None;
        }
        self.names.get(sym.usize()).map(|name| &name[..])
    }

    /// Returns the kind of a symbol, or `None` for a symbol of another
    /// source.
    pub fn kind(&self, sym: Symbol) -> Option<SymbolKind> {
        if !self.contains(sym) {
            return None;
        }
        self.kinds.get(sym.usize()).copied()
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Iterates over all symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        let origin = self.origin;
        (FIRST_ID..self.next_id).map(move |id| Symbol::new(origin, id))
    }
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new()
    }
}
