//! Query translation engine
//!
//! Turns a parsed query tree into backend-neutral boolean match
//! instructions:
//! - must match / should match / must not match, for full-text clauses
//! - the same trio for exact term clauses, with a cache-safety flag
//! - range clauses, always bound to a field
//!
//! A backend implements [`QueryTarget`] and accumulates its own native
//! query representation (a JSON request body, a WHERE clause) as the
//! [`Translator`] walks the tree. The translator enforces the nesting
//! rules, resolves field-level against node-level operators, and flags
//! which field matches are exact enough to prefilter on.

pub mod engine;
pub mod fulltext;
pub mod target;

pub use engine::Translator;
pub use fulltext::FullTextFields;
pub use target::{NullTarget, QueryTarget};
