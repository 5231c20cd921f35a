//! Key-value world state - trait and in-memory implementation

use std::collections::HashMap;

use crate::error::StateError;

/// Key-value view of the host ledger's world state.
///
/// Calls are synchronous and either return or fail; coordination of
/// concurrent invocations is the host's responsibility.
pub trait StateStore {
    /// Read the raw value stored under `key`, or `None` when absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Write `value` under `key`, creating or overwriting
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StateError>;
}

/// HashMap-backed state store, for tests and hosts without a platform store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
