//! Registry of field names that support full-text search

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default set of common content-bearing field names.
///
/// This is overridable configuration data, not behavior; replace it
/// wholesale with [`FullTextFields::set`] when the target schema differs.
const DEFAULT_FIELDS: &[&str] = &[
    "_all",
    "title",
    "tiny_title",
    "short_title",
    "excerpt",
    "description",
    "overview",
    "summary",
    "story",
    "html",
    "text",
    "markdown",
    "content",
    "contents",
    "abstract",
    "search_text",
    "bio",
    "meta_title",
    "meta_description",
    "meta_keywords",
    "og_title",
    "og_description",
    "og_keywords",
    "seo_title",
    "seo_description",
    "seo_keywords",
    "caption",
    "captions",
    "img_caption",
    "img_captions",
    "credit",
    "credits",
    "img_credit",
    "img_credits",
    "full_name",
    "first_name",
    "last_name",
    "street1",
    "street2",
    "city",
    "address.street1",
    "address.street2",
    "address.city",
];

/// Case-normalized set of field names considered full text
///
/// Membership decides whether a field's match is relevance-ranked text
/// search (match clauses, never cache-safe) or exact term matching. Names
/// are trimmed and lower-cased on the way in and on lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullTextFields {
    fields: HashSet<String>,
}

impl Default for FullTextFields {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl FullTextFields {
    /// An empty registry (no field is treated as full text)
    pub fn empty() -> Self {
        Self {
            fields: HashSet::new(),
        }
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Replace the registry wholesale
    pub fn set<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields = names
            .into_iter()
            .map(|n| Self::normalize(n.as_ref()))
            .collect();
    }

    /// Add one field name
    pub fn add(&mut self, name: &str) {
        self.fields.insert(Self::normalize(name));
    }

    /// Remove one field name
    pub fn remove(&mut self, name: &str) {
        self.fields.remove(&Self::normalize(name));
    }

    /// Whether the named field supports full-text search
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(&Self::normalize(name))
    }

    /// The registered names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
