//! Abstraction for collections of rules.

use crate::symbol::Symbol;

/// Trait for rule containers.
pub trait RuleContainer {
    /// Inserts a rule with `lhs` and `rhs` on its LHS and RHS.
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]);
}

impl<'a, D> RuleContainer for &'a mut D
where
    D: RuleContainer,
{
    fn add_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) {
        (**self).add_rule(lhs, rhs);
    }
}
