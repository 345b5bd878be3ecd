//! In-memory key-value store

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::BudgetResult;

/// Key-value store backed by a `HashMap`; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw values
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Peek at a raw value without going through the trait
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> BudgetResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("income").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut store = MemoryStore::with_values([("income", "10")]);
        store.set("income", "20".to_string()).unwrap();
        assert_eq!(store.get("income").unwrap().as_deref(), Some("20"));
        assert_eq!(store.raw("income"), Some("20"));
    }
}
