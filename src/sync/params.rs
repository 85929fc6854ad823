//! The address-bar collaborator
//!
//! The engine never touches browser history directly. Whatever holds the
//! query parameters (an address bar behind a WASM shim, a test map) is
//! injected through the narrow [`ParamsStore`] interface.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Narrow interface over wherever the criteria params live
///
/// Writes are in-place replaces: they must never create a navigable history
/// entry or scroll the viewport.
pub trait ParamsStore: Send + Sync {
    /// Read the current query parameters
    fn read_params(&self) -> HashMap<String, String>;

    /// Apply updates: `Some` sets (overwrites) the key, `None` deletes it.
    /// Keys not mentioned are left alone.
    fn write_params(&self, updates: &[(&str, Option<String>)]);
}

/// In-memory params store for tests and embedding
#[derive(Clone, Default)]
pub struct MemoryParams {
    params: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from existing key/value pairs (the "arrived with a query
    /// string" case)
    pub fn with_params(pairs: &[(&str, &str)]) -> Self {
        let params = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            params: Arc::new(RwLock::new(params)),
        }
    }

    /// Current contents, for assertions
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read_params()
    }
}

impl ParamsStore for MemoryParams {
    fn read_params(&self) -> HashMap<String, String> {
        match self.params.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write_params(&self, updates: &[(&str, Option<String>)]) {
        let mut guard = match self.params.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (key, value) in updates {
            match value {
                Some(value) => {
                    guard.insert(key.to_string(), value.clone());
                }
                None => {
                    guard.remove(*key);
                }
            }
        }
    }
}
