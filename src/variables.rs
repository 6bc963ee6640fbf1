//! URL variable persistence
//!
//! URL templates refer to variables by name; the set of current values is
//! persisted as one named payload in an external key-value store. The store
//! and the surface that prompted the save both belong to the embedding
//! application and are reached through traits; no storage backend ships
//! with this crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::RestedError;

/// Name under which the URL variable payload is stored
pub const URL_VARIABLES_NAME: &str = "urlVariables";

/// The persisted payload: a name identifying the set, plus the variables
/// themselves in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    pub name: String,
    pub variables: IndexMap<String, String>,
}

impl VariableSet {
    /// Build the URL variable payload
    pub fn url_variables(variables: IndexMap<String, String>) -> Self {
        Self {
            name: URL_VARIABLES_NAME.to_string(),
            variables,
        }
    }
}

/// Key-value store the variable payload is persisted to
pub trait VariableStore {
    fn set(&mut self, payload: &VariableSet) -> Result<(), RestedError>;
}

/// Surface that prompted the save
///
/// Exactly one of the two callbacks fires per save: `on_saved` dismisses
/// the surface, `on_error` routes the failure to its error handler.
pub trait SaveListener {
    fn on_saved(&mut self);
    fn on_error(&mut self, error: &RestedError);
}

/// Persist the current URL variables and notify the prompting surface
pub fn save_url_variables<S, L>(
    store: &mut S,
    listener: &mut L,
    variables: IndexMap<String, String>,
) where
    S: VariableStore + ?Sized,
    L: SaveListener + ?Sized,
{
    let payload = VariableSet::url_variables(variables);

    match store.set(&payload) {
        Ok(()) => listener.on_saved(),
        Err(e) => listener.on_error(&e),
    }
}
