//! Range nodes - bounded pairs used as field content

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::operator::{impl_node_modifiers, Modifiers};

/// Value type for range bounds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// Calendar date
    Date(NaiveDate),
}

impl RangeValue {
    /// Convert to i64 if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RangeValue::Long(v) => Some(*v),
            RangeValue::Double(v) => Some(*v as i64),
            RangeValue::Date(_) => None,
        }
    }

    /// Convert to f64 if possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RangeValue::Long(v) => Some(*v as f64),
            RangeValue::Double(v) => Some(*v),
            RangeValue::Date(_) => None,
        }
    }

    /// The date value, when this bound is a date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            RangeValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        RangeValue::Long(v)
    }
}

impl From<f64> for RangeValue {
    fn from(v: f64) -> Self {
        RangeValue::Double(v)
    }
}

impl From<NaiveDate> for RangeValue {
    fn from(v: NaiveDate) -> Self {
        RangeValue::Date(v)
    }
}

/// Bounds for a range, e.g. `[1 TO 5]` or `{2024-01-01 TO *}`
///
/// Inclusive ends populate `gte`/`lte`, exclusive ends `gt`/`lt`; an
/// unbounded end leaves all four empty on that side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Greater than or equal to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<RangeValue>,
    /// Greater than
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<RangeValue>,
    /// Less than or equal to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<RangeValue>,
    /// Less than
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<RangeValue>,
}

/// A numeric or date range, usable only as a field's content
///
/// e.g. `rating:[1..5]`. The tree may place one anywhere; the translation
/// engine rejects any position other than directly inside a field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub bounds: RangeBounds,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Range {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound
    pub fn gte(mut self, value: impl Into<RangeValue>) -> Self {
        self.bounds.gte = Some(value.into());
        self
    }

    /// Set the exclusive lower bound
    pub fn gt(mut self, value: impl Into<RangeValue>) -> Self {
        self.bounds.gt = Some(value.into());
        self
    }

    /// Set the inclusive upper bound
    pub fn lte(mut self, value: impl Into<RangeValue>) -> Self {
        self.bounds.lte = Some(value.into());
        self
    }

    /// Set the exclusive upper bound
    pub fn lt(mut self, value: impl Into<RangeValue>) -> Self {
        self.bounds.lt = Some(value.into());
        self
    }
}

/// A textual bound pair, e.g. `title:[apple..banana]`
///
/// Word ranges are never exact matches, so a field wrapping one is never
/// cache-safe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRange {
    pub lower: String,
    pub upper: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl WordRange {
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
            modifiers: Modifiers::default(),
        }
    }
}

impl_node_modifiers!(Range, WordRange);
