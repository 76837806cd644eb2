//! Field node - binds a value, range or subquery to a named attribute

use serde::{Deserialize, Serialize};

use super::operator::{impl_node_modifiers, Modifiers};
use super::Node;

/// A named wrapper binding its content to a target attribute
///
/// `status:active` wraps a [`Word`](super::Word) in a field named `status`;
/// `rating:[1..5]` wraps a [`Range`](super::Range). When the wrapped node is
/// a plain simple term, the field's own operator and boost govern the match
/// (`+field:value` beats `field:+value`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub node: Box<Node>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Field {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node: Box::new(node),
            modifiers: Modifiers::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped node
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Whether the wrapped content is a range or subquery rather than a
    /// single simple term
    pub fn has_compound_node(&self) -> bool {
        self.node.is_compound()
    }
}

impl_node_modifiers!(Field);
