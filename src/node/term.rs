//! Simple term nodes - single-value leaves of the query tree

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use super::operator::{impl_node_modifiers, Modifiers};

static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

fn stop_word_set() -> &'static HashSet<String> {
    STOP_WORDS.get_or_init(|| {
        get(LANGUAGE::English)
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect()
    })
}

/// An unquoted word, e.g. `rust` or `prog*`
///
/// The trailing-wildcard flag is set by the parser when the word ended in
/// `*`; the wildcard itself is stripped from `text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub trailing_wildcard: bool,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modifiers: Modifiers::default(),
            trailing_wildcard: false,
        }
    }

    /// Mark this word as carrying a trailing `*`
    pub fn with_trailing_wildcard(mut self) -> Self {
        self.trailing_wildcard = true;
        self
    }

    pub fn has_trailing_wildcard(&self) -> bool {
        self.trailing_wildcard
    }

    /// Whether this word is a common English stop word
    ///
    /// Stop words are never allowed to become mandatory or excluded clauses
    /// in full-text matching.
    pub fn is_stop_word(&self) -> bool {
        stop_word_set().contains(&self.text.to_lowercase())
    }
}

/// A quoted phrase, e.g. `"breaking news"`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// A numeric literal, e.g. `42` or `3.14`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub value: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            modifiers: Modifiers::default(),
        }
    }
}

/// A calendar date, e.g. `2024-12-25`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Date {
    pub value: NaiveDate,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Date {
    pub fn new(value: NaiveDate) -> Self {
        Self {
            value,
            modifiers: Modifiers::default(),
        }
    }

    /// Resolve this date to midnight in the given local time zone
    ///
    /// Backends use this together with the translator's configured time
    /// zone when they need an absolute instant rather than a calendar day.
    pub fn start_of_day(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        self.value
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
    }
}

/// A URL token, e.g. `https://example.com/page`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub value: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Url {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// A hashtag token, e.g. `#rustlang` (value holds `rustlang`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    pub value: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Hashtag {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// A mention token, e.g. `@user` (value holds `user`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub value: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Mention {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// An emoji token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    pub value: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Emoji {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// An emoticon token, e.g. `:)`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emoticon {
    pub value: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Emoticon {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifiers: Modifiers::default(),
        }
    }
}

impl_node_modifiers!(Word, Phrase, Number, Date, Url, Hashtag, Mention, Emoji, Emoticon);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BoolOperator;

    #[test]
    fn test_stop_word_detection() {
        assert!(Word::new("the").is_stop_word());
        assert!(Word::new("The").is_stop_word());
        assert!(Word::new("and").is_stop_word());
        assert!(!Word::new("rust").is_stop_word());
        assert!(!Word::new("cats").is_stop_word());
    }

    #[test]
    fn test_trailing_wildcard() {
        let word = Word::new("prog").with_trailing_wildcard();
        assert!(word.has_trailing_wildcard());
        assert_eq!(word.text, "prog");
        assert!(!Word::new("prog").has_trailing_wildcard());
    }

    #[test]
    fn test_modifier_builders() {
        let word = Word::new("rust")
            .with_operator(BoolOperator::Required)
            .with_boost(2.0);
        assert!(word.is_required());
        assert!(word.use_boost());
        assert!(!word.use_fuzzy());

        let phrase = Phrase::new("hello world").with_operator(BoolOperator::Excluded);
        assert!(phrase.is_excluded());
    }

    #[test]
    fn test_date_start_of_day() {
        let date = Date::new(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = date.start_of_day(offset).unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-12-25T00:00:00-05:00");
    }
}
