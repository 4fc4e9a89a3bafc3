//! String key-value stores backing menu and theme persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser offers two of these: `sessionStorage` for which menus are open
//! and `localStorage` for the theme. Operations take the store as a parameter
//! so the same logic runs against [`MemoryStore`] in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

use crate::error::NavError;

/// Minimal get/set view of a string-valued store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Storage`] when the host store refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, NavError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Storage`] when the host store refuses the write
    /// (quota exceeded, storage disabled).
    fn set(&mut self, key: &str, value: &str) -> Result<(), NavError>;
}

/// In-process store with the same semantics as web storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, as the browser does when a session ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, NavError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), NavError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
