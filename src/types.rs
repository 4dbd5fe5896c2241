//! Data model for theme descriptors and the persisted theme registers.
//!
//! Records serialize to the JSON blobs written under the `theme.active` and
//! `theme.previous` settings keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form per-theme settings (colors, layout switches, ...).
pub type ThemeConfig = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Where a theme descriptor came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    /// Compiled into the crate.
    Builtin,
    /// Discovered from a manifest in the extensions directory.
    Installed,
}

impl ThemeSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Installed => "installed",
        }
    }
}

/// Static metadata describing an activatable theme.
///
/// Serializes with the same camelCase keys a `theme.json` manifest uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Unique identifier used for activation.
    pub slug: String,
    pub name: String,
    /// Semver string as declared by the theme.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    pub source: ThemeSource,
}

/// Result of a registry listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstalledThemes {
    pub themes: Vec<ThemeDescriptor>,
    pub total: usize,
}

impl InstalledThemes {
    pub fn new(themes: Vec<ThemeDescriptor>) -> Self {
        let total = themes.len();
        Self { themes, total }
    }
}

// ---------------------------------------------------------------------------
// Registers
// ---------------------------------------------------------------------------

/// Contents of the active (or previous) theme register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveThemeRecord {
    pub slug: String,
    pub version: String,
    pub source: ThemeSource,
    #[serde(default)]
    pub config: ThemeConfig,
    /// Activation time in Unix epoch milliseconds (`0` for the synthesized default).
    pub activated_at: u64,
}

impl ActiveThemeRecord {
    /// Build a fresh record for `descriptor` activated at `activated_at`.
    pub fn for_descriptor(
        descriptor: &ThemeDescriptor,
        config: ThemeConfig,
        activated_at: u64,
    ) -> Self {
        Self {
            slug: descriptor.slug.clone(),
            version: descriptor.version.clone(),
            source: descriptor.source,
            config,
            activated_at,
        }
    }

    /// Shallow-merge `partial` into this record's config.
    ///
    /// Like-named keys are overwritten; all other keys are preserved.
    pub fn merge_config(&mut self, partial: ThemeConfig) {
        self.config.extend(partial);
    }
}
