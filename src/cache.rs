//! In-memory result cache keyed by [`Operation::cache_key`](crate::graphql::Operation::cache_key).

use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: HashMap<String, Value>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn write(&mut self, key: impl Into<String>, data: Value) {
        let key = key.into();
        debug!(key_len = key.len(), "Writing cache entry");
        self.entries.insert(key, data);
    }

    #[allow(dead_code)]
    pub fn evict(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
