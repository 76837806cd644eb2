pub mod error;
pub mod node;
pub mod parsed_query;
pub mod translate;

pub use error::{Result, TranslateError};
pub use node::Node;
pub use parsed_query::ParsedQuery;
pub use translate::{FullTextFields, NullTarget, QueryTarget, Translator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
