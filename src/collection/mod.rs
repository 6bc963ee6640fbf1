//! Saved-request collections
//!
//! The internal model the exporters consume, plus the file loader used by
//! the CLI.

pub mod parser;
pub mod types;

pub use parser::{load_collection, parse_collection};
pub use types::{Collection, CollectionMeta, FormField, Header, RequestBody, RequestRecord};
