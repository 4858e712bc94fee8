//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::rule::container::RuleContainer;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<C>
where
    C: RuleContainer,
{
    lhs: Symbol,
    rules: C,
}

impl<C> RuleBuilder<C>
where
    C: RuleContainer,
{
    /// Creates a rule builder for alternatives of `lhs`.
    pub fn new(rules: C, lhs: Symbol) -> RuleBuilder<C> {
        RuleBuilder { lhs, rules }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<Sr>(mut self, syms: Sr) -> Self
    where
        Sr: AsRef<[Symbol]>,
    {
        self.rules.add_rule(self.lhs, syms.as_ref());
        self
    }
}
