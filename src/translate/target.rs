//! Backend target contract
//!
//! A target turns the engine's backend-neutral match instructions into its
//! own native query representation (a JSON request body, an SQL WHERE
//! clause, an in-memory filter). The engine owns the traversal and the
//! boolean semantics; the target only records clauses.

use crate::error::Result;
use crate::node::{Field, Node, Subquery};

/// Sink for the translation engine's match instructions
///
/// The seven match operations are mandatory. The scope hooks have no-op
/// defaults; implement them when the backend groups clauses per field or
/// per nested boolean context.
///
/// The `field` argument is the enclosing field, or `None` for untargeted
/// terms. When the field wraps a single simple term, the field's own
/// modifiers govern the clause (`+status:active` makes the clause required
/// even though the inner word is unmarked); the engine has already resolved
/// the operator accordingly, and targets should read boost the same way.
pub trait QueryTarget {
    /// Record a full-text clause that must match (word or phrase)
    fn must_match(&mut self, node: &Node, field: Option<&Field>) -> Result<()>;

    /// Record a full-text clause that should match (word or phrase)
    fn should_match(&mut self, node: &Node, field: Option<&Field>) -> Result<()>;

    /// Record a full-text clause that must not match (word or phrase)
    fn must_not_match(&mut self, node: &Node, field: Option<&Field>) -> Result<()>;

    /// Record an exact term clause that must match
    ///
    /// `cacheable` is true when the enclosing field's match is exact and
    /// mandatory, so the backend may use it as a prefilter or cache key.
    fn must_match_term(&mut self, node: &Node, field: Option<&Field>, cacheable: bool)
        -> Result<()>;

    /// Record an exact term clause that should match
    ///
    /// Should-clauses never carry a cacheable flag; they do not constrain
    /// the result set.
    fn should_match_term(&mut self, node: &Node, field: Option<&Field>) -> Result<()>;

    /// Record an exact term clause that must not match
    fn must_not_match_term(
        &mut self,
        node: &Node,
        field: Option<&Field>,
        cacheable: bool,
    ) -> Result<()>;

    /// Record a range clause
    ///
    /// `range` is always a [`Node::Range`] or [`Node::WordRange`], and
    /// `field` the field it is bound to; ranges cannot appear untargeted.
    fn handle_range(&mut self, range: &Node, field: &Field, cacheable: bool) -> Result<()>;

    /// Called before the clauses of a field scope
    fn start_field(&mut self, _field: &Field, _cacheable: bool) -> Result<()> {
        Ok(())
    }

    /// Called after the clauses of a field scope
    fn end_field(&mut self, _field: &Field, _cacheable: bool) -> Result<()> {
        Ok(())
    }

    /// Called before the clauses of a nested boolean group
    fn start_subquery(&mut self, _subquery: &Subquery, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    /// Called after the clauses of a nested boolean group
    fn end_subquery(&mut self, _subquery: &Subquery, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    /// Reset accumulated output so the target can be reused
    fn clear(&mut self) {}
}

/// A target that discards every instruction
///
/// Useful to validate a tree's nesting structure without building any
/// output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTarget;

impl QueryTarget for NullTarget {
    fn must_match(&mut self, _node: &Node, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    fn should_match(&mut self, _node: &Node, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    fn must_not_match(&mut self, _node: &Node, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    fn must_match_term(
        &mut self,
        _node: &Node,
        _field: Option<&Field>,
        _cacheable: bool,
    ) -> Result<()> {
        Ok(())
    }

    fn should_match_term(&mut self, _node: &Node, _field: Option<&Field>) -> Result<()> {
        Ok(())
    }

    fn must_not_match_term(
        &mut self,
        _node: &Node,
        _field: Option<&Field>,
        _cacheable: bool,
    ) -> Result<()> {
        Ok(())
    }

    fn handle_range(&mut self, _range: &Node, _field: &Field, _cacheable: bool) -> Result<()> {
        Ok(())
    }
}
