//! JSON-file settings store.
//!
//! All settings live in one document:
//! `{ "version": 1, "settings": { "<key>": <json>, ... } }`.

use super::SettingsStore;
use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// On-disk schema version for [`SettingsDocument`].
const SETTINGS_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    settings: BTreeMap<String, Value>,
}

/// Settings persisted to a single JSON file.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    // Serializes load-modify-write of the whole document within this process
    // only. Two processes writing different keys can still race: each loads
    // the whole document and the later rename drops the other's key.
    write_lock: Mutex<()>,
}

impl FileSettingsStore {
    /// Use `path` as the settings document. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<SettingsDocument, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(SettingsDocument::default());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };
        if raw.trim().is_empty() {
            return Ok(SettingsDocument::default());
        }
        let document: SettingsDocument = serde_json::from_str(&raw).map_err(|err| {
            StoreError::Invalid(format!(
                "failed to parse settings file `{}`: {err}",
                self.path.display()
            ))
        })?;
        if document.version > SETTINGS_FILE_VERSION {
            return Err(StoreError::Invalid(format!(
                "unsupported settings file version {} for `{}`",
                document.version,
                self.path.display()
            )));
        }
        Ok(document)
    }

    async fn write(&self, document: &SettingsDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(document)?;
        // Sibling temp file + rename keeps the previous document intact if the
        // write is interrupted.
        let tmp_path = self.temp_path();
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// `<file name>.tmp` next to the settings file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get_setting(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let document = self.load().await?;
        tracing::debug!(key, path = %self.path.display(), "settings read");
        Ok(document.settings.get(key).cloned())
    }

    async fn set_setting(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        document.version = SETTINGS_FILE_VERSION;
        document.settings.insert(key.to_string(), value);
        self.write(&document).await?;
        tracing::debug!(key, path = %self.path.display(), "settings written");
        Ok(())
    }
}
