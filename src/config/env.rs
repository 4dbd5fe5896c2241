//! Environment overrides.

use crate::error::ConfigError;
use std::path::PathBuf;

use super::Config;

/// Overrides the settings store path.
pub const ENV_STORE_PATH: &str = "THEMESWITCH_STORE_PATH";
/// Overrides the extensions directory.
pub const ENV_EXTENSIONS_DIR: &str = "THEMESWITCH_EXTENSIONS_DIR";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = env_lookup(ENV_STORE_PATH) {
        config.store.path = non_empty_path(ENV_STORE_PATH, &path)?;
    }
    if let Some(dir) = env_lookup(ENV_EXTENSIONS_DIR) {
        config.themes.extensions_dir = non_empty_path(ENV_EXTENSIONS_DIR, &dir)?;
    }
    Ok(())
}

/// Trim `value` and reject it when empty, naming `field` in the error.
pub(super) fn non_empty_path(field: &str, value: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} cannot be empty")));
    }
    Ok(PathBuf::from(trimmed))
}
