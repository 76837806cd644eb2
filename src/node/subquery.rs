//! Subquery node - a nested, independently scoped boolean group

use serde::{Deserialize, Serialize};

use super::operator::{impl_node_modifiers, Modifiers};
use super::Node;

/// An ordered group of nodes forming a nested boolean expression
///
/// e.g. the parenthesized part of `tags:(rust OR go)`. Subqueries may sit
/// inside a field but never inside another subquery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subquery {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Subquery {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            modifiers: Modifiers::default(),
        }
    }

    /// The contained nodes, in query order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl_node_modifiers!(Subquery);
