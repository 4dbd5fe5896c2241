//! In-process settings store.

use super::SettingsStore;
use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Settings held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing values.
    pub fn with_values(values: BTreeMap<String, Value>) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }

    /// Snapshot of every stored key/value pair.
    pub async fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values.lock().await.clone()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_setting(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set_setting(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn unset_key_reads_as_none() {
        let store = MemorySettingsStore::new();
        assert!(store.get_setting("missing").await.expect("get").is_none());
    }

    #[tokio::test]
    async fn set_then_get_returns_last_write() {
        let store = MemorySettingsStore::new();
        store.set_setting("k", json!(1)).await.expect("set");
        store.set_setting("k", json!({"a": 2})).await.expect("set");
        assert_eq!(store.get_setting("k").await.expect("get"), Some(json!({"a": 2})));
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn seeded_values_are_visible() {
        let mut seed = BTreeMap::new();
        seed.insert("theme.active".to_string(), json!({"slug": "yevbi"}));
        let store = MemorySettingsStore::with_values(seed);
        let value = store.get_setting("theme.active").await.expect("get");
        assert_eq!(value.expect("seeded")["slug"], json!("yevbi"));
    }
}
