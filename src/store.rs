use dashmap::DashMap;
use std::sync::Arc;

/// In-memory key/value store shared across request handlers
///
/// Entries live for the lifetime of the process. Concurrent writers to the
/// same key race; the last write wins.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<DashMap<String, String>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key
    pub fn set(&self, key: String, value: String) {
        self.inner.insert(key, value);
    }

    /// Look up the current value for a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
