//! Definitions of the grammar store and its builder.

use std::slice;

use bit_vec::BitVec;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::rule::builder::RuleBuilder;
use crate::rule::container::RuleContainer;
use crate::rule::{Rule, RuleIndex};
use crate::symbol::{Symbol, SymbolKind, SymbolSource};

/// Upper bounds on the size of a grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limits {
    /// Maximum number of declared terminals and nonterminals together.
    pub max_symbols: usize,
    /// Maximum number of rules.
    pub max_rules: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_symbols: 1024,
            max_rules: 4096,
        }
    }
}

/// Settings for building a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrammarConfig {
    /// Size limits.
    pub limits: Limits,
    /// Name of the epsilon marker.
    pub epsilon_name: String,
    /// Name of the end-of-input marker.
    pub end_marker_name: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        GrammarConfig {
            limits: Limits::default(),
            epsilon_name: "#".to_owned(),
            end_marker_name: "$".to_owned(),
        }
    }
}

/// Collects symbol declarations and rules, then validates them into a
/// [`Grammar`].
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    config: GrammarConfig,
    sym_source: SymbolSource,
    rules: Vec<Rule>,
    start: Option<Symbol>,
    epsilon: Symbol,
    end_marker: Symbol,
    errors: Vec<BuildError>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::with_config(GrammarConfig::default())
    }
}

impl GrammarBuilder {
    /// Creates an empty builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given configuration.
    pub fn with_config(config: GrammarConfig) -> Self {
        let mut sym_source = SymbolSource::new();
        let mut errors = vec![];
        let epsilon = match sym_source.next_sym(&config.epsilon_name, SymbolKind::Epsilon) {
            Some(sym) => sym,
            None => unreachable!("a fresh symbol source has no names taken"),
        };
        let end_marker = match sym_source.next_sym(&config.end_marker_name, SymbolKind::EndMarker) {
            Some(sym) => sym,
            None => {
                errors.push(BuildError::malformed(format!(
                    "epsilon and end marker share the name `{}`",
                    config.end_marker_name
                )));
                epsilon
            }
        };
        GrammarBuilder {
            config,
            sym_source,
            rules: vec![],
            start: None,
            epsilon,
            end_marker,
            errors,
        }
    }

    /// Declares a nonterminal.
    pub fn nonterminal(&mut self, name: &str) -> Symbol {
        self.declare(name, SymbolKind::Nonterminal)
    }

    /// Declares a terminal.
    pub fn terminal(&mut self, name: &str) -> Symbol {
        self.declare(name, SymbolKind::Terminal)
    }

    /// Declares several nonterminals at once.
    pub fn nonterminals<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.nonterminal(name))
    }

    /// Declares several terminals at once.
    pub fn terminals<const N: usize>(&mut self, names: [&str; N]) -> [Symbol; N] {
        names.map(|name| self.terminal(name))
    }

    /// Returns the epsilon marker, for writing empty alternatives.
    pub fn epsilon(&self) -> Symbol {
        self.epsilon
    }

    /// Returns the end-of-input marker.
    pub fn end_marker(&self) -> Symbol {
        self.end_marker
    }

    /// Designates the start symbol. Without this, the first declared
    /// nonterminal is the start symbol.
    pub fn set_start(&mut self, start: Symbol) -> &mut Self {
        self.start = Some(start);
        self
    }

    /// Starts building alternatives for `lhs`.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<&mut Self> {
        RuleBuilder::new(self, lhs)
    }

    fn declare(&mut self, name: &str, kind: SymbolKind) -> Symbol {
        if let Some(sym) = self.sym_source.next_sym(name, kind) {
            return sym;
        }
        // The name is taken; `get` cannot miss here.
        let existing = self.sym_source.get(name).unwrap_or(self.epsilon);
        if let Some(existing_kind) = self.sym_source.kind(existing) {
            if existing_kind != kind {
                self.errors.push(BuildError::malformed(format!(
                    "symbol `{}` declared as both {:?} and {:?}",
                    name, existing_kind, kind
                )));
            }
        }
        existing
    }

    /// Validates the declarations and rules, and finalizes the grammar.
    pub fn build(self) -> Result<Grammar, BuildError> {
        let GrammarBuilder {
            config,
            sym_source,
            rules,
            start,
            epsilon,
            end_marker,
            mut errors,
        } = self;
        if !errors.is_empty() {
            return Err(errors.swap_remove(0));
        }

        let mut nonterminals = vec![];
        let mut terminals = vec![];
        let mut dense = vec![None; sym_source.num_syms()];
        for sym in sym_source.symbols() {
            match sym_source.kind(sym) {
                Some(SymbolKind::Nonterminal) => {
                    dense[sym.usize()] = Some(nonterminals.len());
                    nonterminals.push(sym);
                }
                Some(SymbolKind::Terminal) => {
                    dense[sym.usize()] = Some(terminals.len());
                    terminals.push(sym);
                }
                Some(SymbolKind::Epsilon | SymbolKind::EndMarker) | None => {}
            }
        }

        let num_declared = nonterminals.len() + terminals.len();
        if num_declared > config.limits.max_symbols {
            return Err(BuildError::Capacity {
                what: "symbols",
                limit: config.limits.max_symbols,
                requested: num_declared,
            });
        }
        if rules.len() > config.limits.max_rules {
            return Err(BuildError::Capacity {
                what: "rules",
                limit: config.limits.max_rules,
                requested: rules.len(),
            });
        }
        if nonterminals.is_empty() {
            return Err(BuildError::malformed("no nonterminals declared"));
        }
        if rules.is_empty() {
            return Err(BuildError::malformed("grammar has no rules"));
        }

        let mut canonical_rules = Vec::with_capacity(rules.len());
        for (idx, rule) in rules.into_iter().enumerate() {
            let Some(lhs_name) = sym_source.name(rule.lhs) else {
                return Err(BuildError::malformed(format!(
                    "rule {} has an undeclared symbol on its left-hand side",
                    idx
                )));
            };
            if sym_source.kind(rule.lhs) != Some(SymbolKind::Nonterminal) {
                return Err(BuildError::malformed(format!(
                    "rule {} has `{}` on its left-hand side, which is not a nonterminal",
                    idx, lhs_name
                )));
            }
            let mut rhs = Vec::with_capacity(rule.rhs.len());
            for &sym in &rule.rhs {
                match sym_source.kind(sym) {
                    None => {
                        return Err(BuildError::malformed(format!(
                            "rule {} has an undeclared symbol on its right-hand side",
                            idx
                        )));
                    }
                    Some(SymbolKind::Epsilon) => {}
                    Some(SymbolKind::EndMarker) => {
                        return Err(BuildError::malformed(format!(
                            "rule {} has the end marker on its right-hand side",
                            idx
                        )));
                    }
                    Some(SymbolKind::Terminal | SymbolKind::Nonterminal) => rhs.push(sym),
                }
            }
            canonical_rules.push(Rule::new(rule.lhs, rhs));
        }

        let start = start.unwrap_or(nonterminals[0]);
        if sym_source.kind(start) != Some(SymbolKind::Nonterminal) {
            return Err(BuildError::malformed("start symbol is not a nonterminal"));
        }

        debug!(
            "built grammar with {} nonterminals, {} terminals and {} rules",
            nonterminals.len(),
            terminals.len(),
            canonical_rules.len()
        );

        Ok(Grammar {
            sym_source,
            nonterminals,
            terminals,
            dense,
            rules: canonical_rules,
            start,
            epsilon,
            end_marker,
        })
    }
}

impl RuleContainer for GrammarBuilder {
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        self.rules.push(Rule::new(lhs, rhs.to_vec()));
    }
}

/// A validated context-free grammar. Read-only.
///
/// Every declared terminal has a dense column index and every declared
/// nonterminal has a dense row index, both in declaration order.
#[derive(Clone, Debug)]
pub struct Grammar {
    sym_source: SymbolSource,
    nonterminals: Vec<Symbol>,
    terminals: Vec<Symbol>,
    /// Row for a nonterminal, column for a terminal.
    dense: Vec<Option<usize>>,
    rules: Vec<Rule>,
    start: Symbol,
    epsilon: Symbol,
    end_marker: Symbol,
}

impl Grammar {
    /// Returns the nonterminals in declaration order.
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals[..]
    }

    /// Returns the terminals in declaration order. Sentinels are not
    /// included.
    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals[..]
    }

    /// Returns an iterator over the rules in declaration order.
    pub fn rules(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule at the given index.
    pub fn rule(&self, idx: RuleIndex) -> &Rule {
        &self.rules[idx.usize()]
    }

    /// Iterates over the alternatives of `lhs` with their indices.
    pub fn rules_for(&self, lhs: Symbol) -> impl Iterator<Item = (RuleIndex, &Rule)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.lhs == lhs)
            .map(|(idx, rule)| (RuleIndex(idx), rule))
    }

    /// Returns the start symbol.
    pub fn start_symbol(&self) -> Symbol {
        self.start
    }

    /// Returns the epsilon marker.
    pub fn epsilon(&self) -> Symbol {
        self.epsilon
    }

    /// Returns the end-of-input marker.
    pub fn end_marker(&self) -> Symbol {
        self.end_marker
    }

    /// Returns the number of symbols, sentinels included.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the kind of a symbol, or `None` if the symbol does not
    /// belong to this grammar.
    pub fn kind(&self, sym: Symbol) -> Option<SymbolKind> {
        self.sym_source.kind(sym)
    }

    /// Returns the name of a symbol, or `None` if the symbol does not
    /// belong to this grammar.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name(sym)
    }

    /// Looks up a symbol by name.
    pub fn symbol_by_name(&self, name: &str) -> Option<Symbol> {
        self.sym_source.get(name)
    }

    /// Checks whether a symbol is a terminal.
    #[inline]
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.kind(sym) == Some(SymbolKind::Terminal)
    }

    /// Checks whether a symbol is a nonterminal.
    #[inline]
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.kind(sym) == Some(SymbolKind::Nonterminal)
    }

    /// Returns the dense row of a nonterminal.
    #[inline]
    pub fn nonterminal_index(&self, sym: Symbol) -> Option<usize> {
        if self.is_nonterminal(sym) {
            self.dense[sym.usize()]
        } else {
            None
        }
    }

    /// Returns the dense column of a terminal.
    #[inline]
    pub fn terminal_index(&self, sym: Symbol) -> Option<usize> {
        if self.is_terminal(sym) {
            self.dense[sym.usize()]
        } else {
            None
        }
    }

    /// Returns the table column of a lookahead symbol: a terminal, or the
    /// end marker in the last column.
    #[inline]
    pub fn column(&self, sym: Symbol) -> Option<usize> {
        if sym == self.end_marker {
            Some(self.terminals.len())
        } else {
            self.terminal_index(sym)
        }
    }

    /// Returns the number of table columns, that is the terminals and
    /// the end marker.
    pub fn num_columns(&self) -> usize {
        self.terminals.len() + 1
    }

    /// Calculates the RHS transitive closure over nonterminal rows.
    ///
    /// If **any** nonterminal on a rule's RHS has the property, the LHS
    /// gets it too.
    pub fn rhs_closure_for_any(&self, property: &mut BitVec) {
        debug_assert_eq!(property.len(), self.nonterminals.len());
        let mut work_stack: Vec<usize> = property
            .iter()
            .enumerate()
            .filter_map(|(row, has_property)| if has_property { Some(row) } else { None })
            .collect();
        while let Some(work_row) = work_stack.pop() {
            let work_sym = self.nonterminals[work_row];
            for rule in self.rules() {
                let lhs_row = self.dense[rule.lhs.usize()].unwrap_or(0);
                if !property[lhs_row] && rule.rhs.contains(&work_sym) {
                    property.set(lhs_row, true);
                    work_stack.push(lhs_row);
                }
            }
        }
    }
}
