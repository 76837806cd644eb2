//! Parsed query - the ordered sequence of top-level nodes

use serde::{Deserialize, Serialize};

use crate::node::{Field, Hashtag, Mention, Node, Phrase, Url, Word};

/// An immutable, ordered sequence of top-level query nodes
///
/// Produced once by an upstream parser and only read afterwards. The
/// per-kind accessors iterate top-level nodes only; they do not descend
/// into fields or subqueries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    nodes: Vec<Node>,
}

impl ParsedQuery {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// All top-level nodes, in query order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level words, in query order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Word(w) => Some(w),
            _ => None,
        })
    }

    /// Top-level quoted phrases, in query order
    pub fn phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Phrase(p) => Some(p),
            _ => None,
        })
    }

    /// Top-level fields (`name:value` filters), in query order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Field(f) => Some(f),
            _ => None,
        })
    }

    /// Top-level hashtags, in query order
    pub fn hashtags(&self) -> impl Iterator<Item = &Hashtag> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Hashtag(h) => Some(h),
            _ => None,
        })
    }

    /// Top-level mentions, in query order
    pub fn mentions(&self) -> impl Iterator<Item = &Mention> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Mention(m) => Some(m),
            _ => None,
        })
    }

    /// Top-level URLs, in query order
    pub fn urls(&self) -> impl Iterator<Item = &Url> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Url(u) => Some(u),
            _ => None,
        })
    }
}

impl From<Vec<Node>> for ParsedQuery {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl<'a> IntoIterator for &'a ParsedQuery {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
