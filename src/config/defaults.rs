//! Default configuration constants.

use std::path::{Path, PathBuf};

/// Application directory name under the config root.
pub(super) const APP_DIR_NAME: &str = "themeswitch";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "themeswitch.toml";
/// Settings document name under the app directory.
pub(super) const SETTINGS_FILE_NAME: &str = "settings.json";
/// Local fallback directory when no config root resolves.
pub(super) const LOCAL_STATE_DIR: &str = ".themeswitch";
/// Default directory scanned for installed themes.
pub(super) const DEFAULT_EXTENSIONS_DIR: &str = "extensions/themes";

/// Default settings store path for a resolved config root.
pub(super) fn default_store_path(config_root: Option<&Path>) -> PathBuf {
    match config_root {
        Some(root) => root.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME),
        None => PathBuf::from(LOCAL_STATE_DIR).join(SETTINGS_FILE_NAME),
    }
}
