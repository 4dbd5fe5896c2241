//! `theme.json` manifest parsing for installed themes.

use crate::types::{ThemeDescriptor, ThemeSource};
use serde::Deserialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// File name looked up inside each theme directory.
pub const MANIFEST_FILE_NAME: &str = "theme.json";

/// Why a candidate theme directory was left out of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The directory has no `theme.json`.
    MissingManifest,
    /// The manifest exists but could not be read.
    Unreadable(String),
    /// The manifest is not valid JSON for the expected shape.
    Malformed(String),
    /// The manifest parsed but a field is empty or not allowed.
    Invalid(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingManifest => write!(f, "missing {MANIFEST_FILE_NAME}"),
            Self::Unreadable(msg) => write!(f, "unreadable manifest: {msg}"),
            Self::Malformed(msg) => write!(f, "malformed manifest: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid manifest: {msg}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeManifest {
    #[serde(default)]
    slug: Option<String>,
    name: String,
    version: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    preview_image: Option<String>,
}

impl ThemeManifest {
    fn into_descriptor(self, dir_name: &str) -> Result<ThemeDescriptor, SkipReason> {
        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => dir_name.to_string(),
        };
        validate_slug(&slug)?;
        let name = required("name", &self.name)?;
        let version = required("version", &self.version)?;

        Ok(ThemeDescriptor {
            slug,
            name,
            version,
            description: optional(self.description),
            author: optional(self.author),
            category: optional(self.category),
            preview_image: optional(self.preview_image),
            source: ThemeSource::Installed,
        })
    }
}

/// Read and validate the manifest inside one candidate theme directory.
pub fn read_candidate(dir: &Path) -> Result<ThemeDescriptor, SkipReason> {
    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    let raw = match std::fs::read_to_string(&manifest_path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(SkipReason::MissingManifest),
        Err(err) => return Err(SkipReason::Unreadable(err.to_string())),
    };
    let dir_name = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    parse_manifest(&raw, dir_name)
}

/// Parse manifest text; `dir_name` supplies the slug when the manifest omits it.
pub fn parse_manifest(raw: &str, dir_name: &str) -> Result<ThemeDescriptor, SkipReason> {
    let manifest: ThemeManifest =
        serde_json::from_str(raw).map_err(|err| SkipReason::Malformed(err.to_string()))?;
    manifest.into_descriptor(dir_name)
}

fn validate_slug(slug: &str) -> Result<(), SkipReason> {
    if slug.is_empty() {
        return Err(SkipReason::Invalid("slug cannot be empty".to_string()));
    }
    if slug
        .chars()
        .any(|ch| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
    {
        return Err(SkipReason::Invalid(format!(
            "slug `{slug}` can only contain ASCII letters, numbers, '-', '_'"
        )));
    }
    Ok(())
}

fn required(field: &str, value: &str) -> Result<String, SkipReason> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::Invalid(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
