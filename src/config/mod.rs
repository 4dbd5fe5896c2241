//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Command-line overrides applied by the caller (`--store`, `--extensions-dir`)
//! 2. Environment variables (`THEMESWITCH_STORE_PATH`, `THEMESWITCH_EXTENSIONS_DIR`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./themeswitch.toml in the current directory
//! 5. $XDG_CONFIG_HOME/themeswitch/themeswitch.toml (or ~/.config/...)
//! 6. Built-in defaults

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

pub use env::{ENV_EXTENSIONS_DIR, ENV_STORE_PATH};
pub use types::{
    Config, ConfigSource, DisplayConfig, LoadedConfig, StoreConfig, ThemesConfig,
};

use defaults::{default_store_path, APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EXTENSIONS_DIR};
use env::{apply_env_overrides, non_empty_path};
use types::FileConfig;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration and report which file it came from.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let root = config_root();
    let (text, source) = read_config_text(path_override, &read_file, root.as_deref())?;
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve_file_config(parsed, root.as_deref())?;
    apply_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(?source, store = %config.store.path.display(), "configuration loaded");
    Ok(LoadedConfig { config, source })
}

fn read_config_text<FRead>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: Option<&Path>,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if let Some(text) = read_optional(read_file, &local)? {
        return Ok((text, ConfigSource::Local(local)));
    }

    if let Some(root) = config_root {
        let global = root.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Some(text) = read_optional(read_file, &global)? {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Read `path`, mapping "not found" to `None`.
fn read_optional<FRead>(read_file: &FRead, path: &Path) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

fn resolve_file_config(parsed: FileConfig, config_root: Option<&Path>) -> Result<Config, ConfigError> {
    let store_path = match parsed.store.path.as_deref() {
        Some(path) => non_empty_path("store.path", path)?,
        None => default_store_path(config_root),
    };
    let extensions_dir = match parsed.themes.extensions_dir.as_deref() {
        Some(dir) => non_empty_path("themes.extensions_dir", dir)?,
        None => PathBuf::from(DEFAULT_EXTENSIONS_DIR),
    };
    let mut display = DisplayConfig::default();
    if let Some(color) = parsed.display.color {
        display.color = color;
    }
    Ok(Config {
        store: StoreConfig { path: store_path },
        themes: ThemesConfig { extensions_dir },
        display,
    })
}

/// Base per-user config directory (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
