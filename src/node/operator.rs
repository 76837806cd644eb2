//! Boolean operator and shared match modifiers

use serde::{Deserialize, Serialize};

/// The must/should/must-not semantics of a node or field
///
/// An unmarked term carries `Optional`, the parser convention for plain
/// query text. `Required` corresponds to a leading `+`, `Excluded` to a
/// leading `-` or `NOT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolOperator {
    /// The clause should match (OR semantics)
    #[default]
    Optional,
    /// The clause must match (AND semantics)
    Required,
    /// The clause must not match (NOT semantics)
    Excluded,
}

/// Match modifiers shared by every node variant
///
/// Every node in the tree carries one of these: its boolean operator, an
/// optional boost weight and an optional fuzzy-match distance. The
/// translation engine reads these to resolve dispatch; it never inspects
/// the node's text or value payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub operator: BoolOperator,
    /// Boost weight, e.g. `rust^2.5`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<f32>,
    /// Fuzzy edit distance, e.g. `rust~2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<u32>,
}

impl Modifiers {
    /// Modifiers for a plain, unmarked term
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifiers for a `+term`
    pub fn required() -> Self {
        Self {
            operator: BoolOperator::Required,
            ..Self::default()
        }
    }

    /// Modifiers for a `-term`
    pub fn excluded() -> Self {
        Self {
            operator: BoolOperator::Excluded,
            ..Self::default()
        }
    }

    /// Set the operator
    pub fn with_operator(mut self, operator: BoolOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Set the boost weight
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the fuzzy edit distance
    pub fn with_fuzzy(mut self, distance: u32) -> Self {
        self.fuzzy = Some(distance);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.operator == BoolOperator::Optional
    }

    pub fn is_required(&self) -> bool {
        self.operator == BoolOperator::Required
    }

    pub fn is_excluded(&self) -> bool {
        self.operator == BoolOperator::Excluded
    }

    /// Whether a boost weight was given
    pub fn use_boost(&self) -> bool {
        self.boost.is_some()
    }

    /// Whether fuzzy matching was requested
    pub fn use_fuzzy(&self) -> bool {
        self.fuzzy.is_some()
    }

    /// The effective boost weight (1.0 when none was given)
    pub fn boost_or_default(&self) -> f32 {
        self.boost.unwrap_or(1.0)
    }
}

/// Implements the shared modifier accessors and builders for node structs.
///
/// Every variant embeds one `Modifiers` value; these impls keep the
/// construction surface identical across kinds.
macro_rules! impl_node_modifiers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Replace the match modifiers wholesale
                pub fn with_modifiers(mut self, modifiers: $crate::node::Modifiers) -> Self {
                    self.modifiers = modifiers;
                    self
                }

                /// Set the boolean operator
                pub fn with_operator(mut self, operator: $crate::node::BoolOperator) -> Self {
                    self.modifiers.operator = operator;
                    self
                }

                /// Set the boost weight
                pub fn with_boost(mut self, boost: f32) -> Self {
                    self.modifiers.boost = Some(boost);
                    self
                }

                /// Set the fuzzy edit distance
                pub fn with_fuzzy(mut self, distance: u32) -> Self {
                    self.modifiers.fuzzy = Some(distance);
                    self
                }

                pub fn is_optional(&self) -> bool {
                    self.modifiers.is_optional()
                }

                pub fn is_required(&self) -> bool {
                    self.modifiers.is_required()
                }

                pub fn is_excluded(&self) -> bool {
                    self.modifiers.is_excluded()
                }

                /// Whether a boost weight was given
                pub fn use_boost(&self) -> bool {
                    self.modifiers.use_boost()
                }

                /// Whether fuzzy matching was requested
                pub fn use_fuzzy(&self) -> bool {
                    self.modifiers.use_fuzzy()
                }
            }
        )+
    };
}

pub(crate) use impl_node_modifiers;
