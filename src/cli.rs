//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use serde_json::Value;
use themeswitch::error::AppError;
use themeswitch::types::ThemeConfig;

/// Manage the active storefront theme: list, activate, configure, roll back.
#[derive(Debug, Parser)]
#[command(name = "themeswitch", version)]
pub struct Args {
    /// Path to config file (default: ./themeswitch.toml or ~/.config/themeswitch/themeswitch.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the settings store path.
    #[arg(long = "store", global = true)]
    pub store: Option<String>,

    /// Override the directory scanned for installed themes.
    #[arg(long = "extensions-dir", global = true)]
    pub extensions_dir: Option<String>,

    /// Print results as JSON.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List built-in and installed themes.
    List,
    /// Show the active theme.
    Active,
    /// Show the theme a rollback would restore.
    Previous,
    /// Activate a theme by slug.
    Activate {
        slug: String,
        /// Full theme config as a JSON object.
        #[arg(long = "config-json", value_name = "JSON")]
        config_json: Option<String>,
        /// Config entry `key=value`; repeatable, applied over --config-json.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Swap the active and previous themes.
    Rollback,
    /// Merge `key=value` entries into the active theme's config.
    SetConfig {
        #[arg(value_name = "KEY=VALUE", required = true)]
        entries: Vec<String>,
    },
}

/// Build the explicit activation config, or `None` when no config flag was given.
pub fn activation_config(
    config_json: Option<&str>,
    set: &[String],
) -> Result<Option<ThemeConfig>, AppError> {
    if config_json.is_none() && set.is_empty() {
        return Ok(None);
    }
    let mut config = match config_json {
        Some(raw) => parse_config_object(raw)?,
        None => ThemeConfig::new(),
    };
    config.extend(parse_assignments(set)?);
    Ok(Some(config))
}

/// Parse a JSON object into a theme config.
pub fn parse_config_object(raw: &str) -> Result<ThemeConfig, AppError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| AppError::Usage(format!("--config-json is not valid JSON: {err}")))?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(AppError::Usage(
            "--config-json must be a JSON object".to_string(),
        )),
    }
}

/// Parse `key=value` entries; values are JSON when they parse as JSON, else strings.
pub fn parse_assignments(entries: &[String]) -> Result<ThemeConfig, AppError> {
    let mut config = ThemeConfig::new();
    for entry in entries {
        let Some((key, raw)) = entry.split_once('=') else {
            return Err(AppError::Usage(format!(
                "expected KEY=VALUE, got `{entry}`"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::Usage(format!("empty key in `{entry}`")));
        }
        let value = serde_json::from_str::<Value>(raw)
            .unwrap_or_else(|_| Value::String(raw.to_string()));
        config.insert(key.to_string(), value);
    }
    Ok(config)
}
