//! Key-value settings persistence.
//!
//! Theme state lives in a generic settings store holding JSON blobs keyed by
//! string. Each `set_setting` call is last-write-wins for its key; nothing is
//! transactional across keys.

mod file;
mod memory;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;

use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;

/// Backend for persisted settings.
///
/// Implement this trait to back theme state with a database table or any
/// other key-value service.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never set.
    async fn get_setting(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set_setting(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    async fn get_setting(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get_setting(key).await
    }

    async fn set_setting(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).set_setting(key, value).await
    }
}
