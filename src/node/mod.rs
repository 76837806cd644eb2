//! Query syntax tree node model
//!
//! The closed set of node kinds a parsed query is built from:
//! - Simple terms: [`Word`], [`Phrase`], [`Number`], [`Date`], [`Url`],
//!   [`Hashtag`], [`Mention`], [`Emoji`], [`Emoticon`]
//! - Composites: [`Field`] (named wrapper), [`Range`] / [`WordRange`]
//!   (bounded pairs), [`Subquery`] (nested boolean group)
//!
//! Every variant embeds a shared [`Modifiers`] value carrying its boolean
//! operator, optional boost and optional fuzzy distance. The translation
//! engine dispatches on variant identity and modifiers only; payloads are
//! for backends.

mod field;
mod operator;
mod range;
mod subquery;
mod term;

pub use field::Field;
pub use operator::{BoolOperator, Modifiers};
pub use range::{Range, RangeBounds, RangeValue, WordRange};
pub use subquery::Subquery;
pub use term::{Date, Emoji, Emoticon, Hashtag, Mention, Number, Phrase, Url, Word};

/// A node in the parsed query tree
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Word(Word),
    Phrase(Phrase),
    Number(Number),
    Date(Date),
    Url(Url),
    Hashtag(Hashtag),
    Mention(Mention),
    Emoji(Emoji),
    Emoticon(Emoticon),
    Field(Field),
    Range(Range),
    WordRange(WordRange),
    Subquery(Subquery),
}

impl Node {
    /// The shared match modifiers of this node
    pub fn modifiers(&self) -> &Modifiers {
        match self {
            Node::Word(n) => &n.modifiers,
            Node::Phrase(n) => &n.modifiers,
            Node::Number(n) => &n.modifiers,
            Node::Date(n) => &n.modifiers,
            Node::Url(n) => &n.modifiers,
            Node::Hashtag(n) => &n.modifiers,
            Node::Mention(n) => &n.modifiers,
            Node::Emoji(n) => &n.modifiers,
            Node::Emoticon(n) => &n.modifiers,
            Node::Field(n) => &n.modifiers,
            Node::Range(n) => &n.modifiers,
            Node::WordRange(n) => &n.modifiers,
            Node::Subquery(n) => &n.modifiers,
        }
    }

    /// The node kind name for logging and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Word(_) => "word",
            Node::Phrase(_) => "phrase",
            Node::Number(_) => "number",
            Node::Date(_) => "date",
            Node::Url(_) => "url",
            Node::Hashtag(_) => "hashtag",
            Node::Mention(_) => "mention",
            Node::Emoji(_) => "emoji",
            Node::Emoticon(_) => "emoticon",
            Node::Field(_) => "field",
            Node::Range(_) => "range",
            Node::WordRange(_) => "word_range",
            Node::Subquery(_) => "subquery",
        }
    }

    /// Whether this node is a range or subquery rather than a single term
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Node::Range(_) | Node::WordRange(_) | Node::Subquery(_)
        )
    }

    /// Whether this node requests fuzzy matching
    pub fn use_fuzzy(&self) -> bool {
        self.modifiers().use_fuzzy()
    }
}
