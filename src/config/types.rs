//! Configuration data model.
//!
//! `FileConfig` mirrors the TOML file; `Config` is the resolved runtime view
//! with every default filled in.

use serde::Deserialize;
use std::path::PathBuf;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreConfig,
    pub themes: ThemesConfig,
    pub display: DisplayConfig,
}

/// Where theme registers are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON settings document path.
    pub path: PathBuf,
}

/// Where installed themes are discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemesConfig {
    pub extensions_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Which file (if any) the configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    BuiltInDefaults,
}

/// Configuration plus the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub(super) store: FileStoreConfig,
    #[serde(default)]
    pub(super) themes: FileThemesConfig,
    #[serde(default)]
    pub(super) display: FileDisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileStoreConfig {
    pub(super) path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileThemesConfig {
    pub(super) extensions_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub(super) color: Option<bool>,
}
