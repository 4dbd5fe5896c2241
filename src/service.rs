//! Theme activation state machine.
//!
//! Two registers live in the settings store: the active theme record under
//! [`ACTIVE_THEME_KEY`] and, once the theme has changed at least once, the
//! previous record under [`PREVIOUS_THEME_KEY`]. Activation pushes the old
//! active record into `previous`; rollback swaps the two.
//!
//! Every transition reads before it writes, but there is no lock or
//! compare-and-swap between the read and the writes. Two operators acting at
//! the same time can lose an update (for example both activations reading the
//! same prior `active`). Theme changes are rare operator actions, so the
//! service assumes a single writer.

use crate::error::{StoreError, ThemeError};
use crate::registry::{default_theme, ThemeRegistry};
use crate::settings::SettingsStore;
use crate::types::{ActiveThemeRecord, InstalledThemes, ThemeConfig};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings key holding the active theme record.
pub const ACTIVE_THEME_KEY: &str = "theme.active";
/// Settings key holding the record replaced by the last slug change.
pub const PREVIOUS_THEME_KEY: &str = "theme.previous";

/// Owner of the active/previous theme registers.
#[derive(Debug)]
pub struct ThemeService<S> {
    store: S,
    registry: ThemeRegistry,
}

impl<S: SettingsStore> ThemeService<S> {
    pub fn new(store: S, registry: ThemeRegistry) -> Self {
        Self { store, registry }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every theme available for activation with its count.
    pub async fn installed_themes(&self) -> Result<InstalledThemes, ThemeError> {
        self.with_registry(|registry| registry.installed_themes()).await
    }

    /// Current active record, or the default theme if none was ever written.
    pub async fn active_theme(&self) -> Result<ActiveThemeRecord, ThemeError> {
        Ok(self
            .read_record(ACTIVE_THEME_KEY)
            .await?
            .unwrap_or_else(default_active_record))
    }

    /// Record replaced by the last slug change, if any.
    pub async fn previous_theme(&self) -> Result<Option<ActiveThemeRecord>, ThemeError> {
        Ok(self.read_record(PREVIOUS_THEME_KEY).await?)
    }

    /// Make `slug` the active theme.
    ///
    /// With no explicit `config`, re-activating the already active slug keeps
    /// its config while switching to a different slug starts from an empty one.
    /// `previous` is only updated when the slug actually changes.
    pub async fn activate_theme(
        &self,
        slug: &str,
        config: Option<ThemeConfig>,
    ) -> Result<ActiveThemeRecord, ThemeError> {
        let wanted = slug.to_string();
        let descriptor = self
            .with_registry(move |registry| registry.resolve(&wanted))
            .await?
            .ok_or_else(|| ThemeError::NotFound(slug.to_string()))?;
        let current = self.active_theme().await?;
        let slug_changed = current.slug != descriptor.slug;

        let config = match config {
            Some(config) => config,
            None if !slug_changed => current.config.clone(),
            None => ThemeConfig::new(),
        };
        let record = ActiveThemeRecord::for_descriptor(&descriptor, config, now_unix_millis());

        if slug_changed {
            self.write_record(PREVIOUS_THEME_KEY, &current).await?;
        }
        self.write_record(ACTIVE_THEME_KEY, &record).await?;

        tracing::info!(
            slug = %record.slug,
            version = %record.version,
            source = record.source.as_str(),
            previous = slug_changed.then_some(current.slug.as_str()),
            "theme activated"
        );
        Ok(record)
    }

    /// Swap the active and previous registers and return the new active record.
    ///
    /// Calling this twice in a row restores the original state.
    pub async fn rollback_theme(&self) -> Result<ActiveThemeRecord, ThemeError> {
        let previous = self.read_record(PREVIOUS_THEME_KEY).await?.ok_or_else(|| {
            ThemeError::InvalidState("no previous theme available".to_string())
        })?;
        let current = self.active_theme().await?;

        self.write_record(ACTIVE_THEME_KEY, &previous).await?;
        self.write_record(PREVIOUS_THEME_KEY, &current).await?;

        tracing::info!(slug = %previous.slug, replaced = %current.slug, "theme rolled back");
        Ok(previous)
    }

    /// Shallow-merge `partial` into the active theme's config.
    ///
    /// The merged config is not validated; `previous` is left untouched.
    pub async fn update_theme_config(
        &self,
        partial: ThemeConfig,
    ) -> Result<ActiveThemeRecord, ThemeError> {
        let mut record = self.active_theme().await?;
        let keys = partial.keys().cloned().collect::<Vec<_>>();
        record.merge_config(partial);
        self.write_record(ACTIVE_THEME_KEY, &record).await?;

        tracing::info!(slug = %record.slug, ?keys, "theme config updated");
        Ok(record)
    }

    // Directory scans use blocking std::fs; keep them off the async workers.
    async fn with_registry<T, F>(&self, scan: F) -> Result<T, ThemeError>
    where
        F: FnOnce(&ThemeRegistry) -> T + Send + 'static,
        T: Send + 'static,
    {
        let registry = self.registry.clone();
        tokio::task::spawn_blocking(move || scan(&registry))
            .await
            .map_err(|err| ThemeError::Store(StoreError::Io(std::io::Error::other(err))))
    }

    async fn read_record(&self, key: &str) -> Result<Option<ActiveThemeRecord>, StoreError> {
        let Some(value) = self.store.get_setting(key).await? else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|err| StoreError::Invalid(format!("failed to decode `{key}`: {err}")))
    }

    async fn write_record(&self, key: &str, record: &ActiveThemeRecord) -> Result<(), StoreError> {
        let value: Value = serde_json::to_value(record)?;
        self.store.set_setting(key, value).await
    }
}

/// Record reported as active before any activation happened.
pub fn default_active_record() -> ActiveThemeRecord {
    ActiveThemeRecord::for_descriptor(&default_theme(), ThemeConfig::new(), 0)
}

fn now_unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
