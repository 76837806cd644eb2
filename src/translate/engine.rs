//! Translation engine - walks a parsed query tree and dispatches
//! backend-neutral match instructions

use chrono::FixedOffset;
use tracing::{debug, warn};

use super::fulltext::FullTextFields;
use super::target::QueryTarget;
use crate::error::{Result, TranslateError};
use crate::node::{Field, Modifiers, Node, Subquery};
use crate::parsed_query::ParsedQuery;

/// Default field name for untargeted terms
const DEFAULT_FIELD: &str = "_all";

/// Default maximum tree nesting depth
const DEFAULT_MAX_DEPTH: usize = 32;

/// Traversal context passed down each recursive dispatch
///
/// Immutable and copied per call, so a failed inner dispatch can never
/// leave the engine with stale scope state.
#[derive(Clone, Copy)]
struct Scope<'a> {
    field: Option<FieldScope<'a>>,
    in_subquery: bool,
    depth: usize,
}

#[derive(Clone, Copy)]
struct FieldScope<'a> {
    field: &'a Field,
    cacheable: bool,
}

impl<'a> Scope<'a> {
    fn root() -> Self {
        Self {
            field: None,
            in_subquery: false,
            depth: 0,
        }
    }

    fn in_field(&self) -> bool {
        self.field.is_some()
    }

    fn field(&self) -> Option<&'a Field> {
        self.field.map(|f| f.field)
    }

    fn cacheable(&self) -> bool {
        self.field.map(|f| f.cacheable).unwrap_or(false)
    }

    fn enter_field<'b>(self, field: &'b Field, cacheable: bool) -> Scope<'b> {
        Scope {
            field: Some(FieldScope { field, cacheable }),
            in_subquery: self.in_subquery,
            depth: self.depth,
        }
    }

    fn enter_subquery(self) -> Self {
        Self {
            in_subquery: true,
            ..self
        }
    }

    fn descend(self, limit: usize) -> Result<Self> {
        if self.depth >= limit {
            return Err(TranslateError::DepthExceeded { limit });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

/// Walks parsed query trees and feeds match instructions to a
/// [`QueryTarget`]
///
/// The translator enforces the nesting rules (fields cannot nest, ranges
/// only directly inside fields, subqueries never inside ranges or other
/// subqueries), resolves the effective boolean operator of every node,
/// decides per field whether the match is cache-safe, and wraps special
/// tokens (hashtags, mentions, emoji, emoticons) in an implicit field when
/// one is configured for their kind.
///
/// Traversal state lives in a per-call scope, so one translator can serve
/// any number of sequential translations without a reset.
///
/// # Example
///
/// ```
/// use querybridge::node::{BoolOperator, Field, Node, Word};
/// use querybridge::{ParsedQuery, Translator};
///
/// let query = ParsedQuery::new(vec![Node::Field(
///     Field::new("status", Node::Word(Word::new("active")))
///         .with_operator(BoolOperator::Required),
/// )]);
///
/// let translator = Translator::new();
/// # let mut target = querybridge::translate::NullTarget::default();
/// translator.translate(&query, &mut target)?;
/// # Ok::<(), querybridge::TranslateError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Translator {
    default_field: String,
    hashtag_field: Option<String>,
    mention_field: Option<String>,
    emoji_field: Option<String>,
    emoticon_field: Option<String>,
    full_text_fields: FullTextFields,
    local_time_zone: Option<FixedOffset>,
    max_depth: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self {
            default_field: DEFAULT_FIELD.to_string(),
            hashtag_field: None,
            mention_field: None,
            emoji_field: None,
            emoticon_field: None,
            full_text_fields: FullTextFields::default(),
            local_time_zone: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the field name backends use for untargeted terms
    pub fn with_default_field(mut self, name: impl Into<String>) -> Self {
        self.default_field = name.into();
        self
    }

    /// Set the implicit field for hashtags outside an explicit field
    pub fn with_hashtag_field(mut self, name: impl Into<String>) -> Self {
        self.hashtag_field = Some(name.into());
        self
    }

    /// Set the implicit field for mentions outside an explicit field
    pub fn with_mention_field(mut self, name: impl Into<String>) -> Self {
        self.mention_field = Some(name.into());
        self
    }

    /// Set the implicit field for emoji outside an explicit field
    pub fn with_emoji_field(mut self, name: impl Into<String>) -> Self {
        self.emoji_field = Some(name.into());
        self
    }

    /// Set the implicit field for emoticons outside an explicit field
    pub fn with_emoticon_field(mut self, name: impl Into<String>) -> Self {
        self.emoticon_field = Some(name.into());
        self
    }

    /// Replace the full-text field registry
    pub fn with_full_text_fields(mut self, fields: FullTextFields) -> Self {
        self.full_text_fields = fields;
        self
    }

    /// Set the local time zone backends use for date interpretation
    pub fn with_local_time_zone(mut self, offset: FixedOffset) -> Self {
        self.local_time_zone = Some(offset);
        self
    }

    /// Set the maximum tree nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn default_field(&self) -> &str {
        &self.default_field
    }

    pub fn local_time_zone(&self) -> Option<FixedOffset> {
        self.local_time_zone
    }

    pub fn full_text_fields(&self) -> &FullTextFields {
        &self.full_text_fields
    }

    /// Mutable access to the full-text field registry
    pub fn full_text_fields_mut(&mut self) -> &mut FullTextFields {
        &mut self.full_text_fields
    }

    /// Whether the named field supports full-text search
    pub fn supports_full_text_search(&self, name: &str) -> bool {
        self.full_text_fields.contains(name)
    }

    /// Translate every top-level node of a parsed query, in order
    pub fn translate(&self, query: &ParsedQuery, target: &mut dyn QueryTarget) -> Result<()> {
        debug!(nodes = query.len(), "translating parsed query");
        for node in query.nodes() {
            self.dispatch(node, Scope::root(), target)?;
        }
        Ok(())
    }

    /// Translate a single node as if it were a one-node query
    pub fn translate_node(&self, node: &Node, target: &mut dyn QueryTarget) -> Result<()> {
        self.dispatch(node, Scope::root(), target)
    }

    /// Whether a query on this field is safe to use as a prefilter or
    /// cache key
    ///
    /// True only for a mandatory (or excluded), unboosted field wrapping an
    /// exact value: no fuzz, no full-text field name, no subquery, no word
    /// range, no phrase, no trailing wildcard. Anything else changes
    /// ranking or needs per-query re-evaluation.
    pub fn query_on_field_is_cacheable(&self, field: &Field) -> bool {
        if field.is_optional() || field.use_boost() {
            return false;
        }

        let node = field.node();
        if node.use_fuzzy() || self.full_text_fields.contains(field.name()) {
            return false;
        }

        match node {
            Node::Subquery(_) | Node::WordRange(_) | Node::Phrase(_) => false,
            Node::Word(word) => !word.has_trailing_wildcard(),
            _ => true,
        }
    }

    fn dispatch(&self, node: &Node, scope: Scope<'_>, target: &mut dyn QueryTarget) -> Result<()> {
        let scope = scope.descend(self.max_depth)?;
        match node {
            Node::Word(_) | Node::Phrase(_) => self.handle_text(node, scope, target),
            Node::Number(_) | Node::Date(_) | Node::Url(_) => self.handle_term(node, scope, target),
            Node::Hashtag(_) => {
                self.add_special_term(node, self.hashtag_field.as_deref(), scope, target)
            }
            Node::Mention(_) => {
                self.add_special_term(node, self.mention_field.as_deref(), scope, target)
            }
            Node::Emoji(_) => {
                self.add_special_term(node, self.emoji_field.as_deref(), scope, target)
            }
            Node::Emoticon(_) => {
                self.add_special_term(node, self.emoticon_field.as_deref(), scope, target)
            }
            Node::Field(field) => self.add_field(field, scope, target),
            Node::Range(_) | Node::WordRange(_) => self.add_range(node, scope, target),
            Node::Subquery(subquery) => self.add_subquery(subquery, scope, target),
        }
    }

    /// Special tokens outside an explicit field get wrapped in an implicit
    /// field when one is configured for their kind, carrying the token's
    /// own operator and boost.
    fn add_special_term(
        &self,
        node: &Node,
        field_name: Option<&str>,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        let Some(name) = field_name else {
            return self.handle_term(node, scope, target);
        };
        if scope.in_field() {
            return self.handle_term(node, scope, target);
        }

        let modifiers = *node.modifiers();
        let mut field = Field::new(name, node.clone()).with_operator(modifiers.operator);
        if let Some(boost) = modifiers.boost {
            field = field.with_boost(boost);
        }

        self.add_field(&field, scope, target)
    }

    fn add_field(
        &self,
        field: &Field,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        if scope.in_field() {
            warn!(field = field.name(), "field nested inside another field");
            return Err(TranslateError::Structural(format!(
                "field '{}' cannot be nested in another field or range",
                field.name()
            )));
        }

        let cacheable = self.query_on_field_is_cacheable(field);
        target.start_field(field, cacheable)?;
        self.dispatch(field.node(), scope.enter_field(field, cacheable), target)?;
        target.end_field(field, cacheable)?;
        Ok(())
    }

    fn add_range(
        &self,
        node: &Node,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        let field = match scope.field() {
            Some(field) if !scope.in_subquery => field,
            _ => {
                warn!(kind = node.kind(), "range outside of a field");
                return Err(TranslateError::Structural(
                    "a range can only be used within a field, e.g. rating:[1..5]".to_string(),
                ));
            }
        };
        target.handle_range(node, field, scope.cacheable())
    }

    fn add_subquery(
        &self,
        subquery: &Subquery,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        if scope.in_subquery {
            warn!("subquery nested inside another subquery");
            return Err(TranslateError::Structural(
                "a subquery cannot be nested in another subquery or a range".to_string(),
            ));
        }

        target.start_subquery(subquery, scope.field())?;
        let inner = scope.enter_subquery();
        for node in subquery.nodes() {
            self.dispatch(node, inner, target)?;
        }
        target.end_subquery(subquery, scope.field())?;
        Ok(())
    }

    /// The authoritative modifiers for a node: the enclosing field's when
    /// that field wraps a single simple term, the node's own otherwise.
    ///
    /// This models `+field:value` (field-level modifier) beating
    /// `field:+value` (node-level modifier) for plain values.
    fn resolve_modifiers(&self, node: &Node, scope: Scope<'_>) -> Modifiers {
        match scope.field() {
            Some(field) if !field.has_compound_node() => field.modifiers,
            _ => *node.modifiers(),
        }
    }

    /// Words and phrases: full-text match clauses, unless targeted at a
    /// field that is not registered full text.
    fn handle_text(
        &self,
        node: &Node,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        if let Some(field) = scope.field() {
            if !self.full_text_fields.contains(field.name()) {
                return self.handle_term(node, scope, target);
            }
        }

        // Stop words can never become mandatory or excluded clauses.
        if let Node::Word(word) = node {
            if word.is_stop_word() {
                return target.should_match(node, scope.field());
            }
        }

        let modifiers = self.resolve_modifiers(node, scope);
        if modifiers.is_optional() {
            target.should_match(node, scope.field())
        } else if modifiers.is_required() {
            target.must_match(node, scope.field())
        } else {
            target.must_not_match(node, scope.field())
        }
    }

    /// Everything else: exact term clauses, with the cacheable flag on the
    /// must and must-not forms.
    fn handle_term(
        &self,
        node: &Node,
        scope: Scope<'_>,
        target: &mut dyn QueryTarget,
    ) -> Result<()> {
        let modifiers = self.resolve_modifiers(node, scope);
        if modifiers.is_optional() {
            target.should_match_term(node, scope.field())
        } else if modifiers.is_required() {
            target.must_match_term(node, scope.field(), scope.cacheable())
        } else {
            target.must_not_match_term(node, scope.field(), scope.cacheable())
        }
    }
}
