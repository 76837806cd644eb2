use thiserror::Error;

/// Main error type for translation operations
#[derive(Error, Debug)]
pub enum TranslateError {
    /// A nesting invariant was violated while walking the query tree.
    ///
    /// A correct parser never produces a tree that trips this; it is a
    /// defensive consistency check against malformed input trees.
    #[error("Structural error: {0}")]
    Structural(String),

    #[error("Query nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// A backend target failed while recording a clause.
    #[error("Target error: {0}")]
    Target(String),
}

/// Result type alias for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;

impl TranslateError {
    /// Check if this error indicates a malformed input tree
    pub fn is_structural(&self) -> bool {
        matches!(self, TranslateError::Structural(_))
    }
}
