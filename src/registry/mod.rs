//! Theme registry: built-in themes plus themes installed on disk.
//!
//! Installed themes live one per subdirectory of the extensions directory,
//! each declaring itself in a `theme.json` manifest. The directory is
//! re-scanned on every query; nothing is cached.

mod builtins;
mod manifest;

pub use builtins::{builtin_theme, builtin_themes, default_theme, DEFAULT_THEME_SLUG};
pub use manifest::{parse_manifest, read_candidate, SkipReason, MANIFEST_FILE_NAME};

use crate::types::{InstalledThemes, ThemeDescriptor};
use std::path::PathBuf;

/// Outcome of scanning the extensions directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Descriptors parsed successfully, in filesystem read order.
    pub installed: Vec<ThemeDescriptor>,
    /// Candidate directories that were left out, with the reason.
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Source of theme descriptors available for activation.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    extensions_dir: Option<PathBuf>,
}

impl ThemeRegistry {
    /// Registry scanning `extensions_dir` for installed themes.
    pub fn new(extensions_dir: impl Into<PathBuf>) -> Self {
        Self {
            extensions_dir: Some(extensions_dir.into()),
        }
    }

    /// Registry exposing only the built-in themes.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// Scan the extensions directory, keeping the reason for every skip.
    ///
    /// A missing or unreadable directory yields an empty report.
    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();
        let Some(dir) = self.extensions_dir.as_deref() else {
            return report;
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "extensions directory does not exist");
                return report;
            }
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "extensions directory unreadable");
                return report;
            }
        };

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match read_candidate(&path) {
                Ok(descriptor) => report.installed.push(descriptor),
                Err(reason) => {
                    tracing::debug!(dir = %path.display(), %reason, "skipping theme directory");
                    report.skipped.push((path, reason));
                }
            }
        }
        report
    }

    /// Built-in descriptors followed by every installed descriptor.
    pub fn list_installed_themes(&self) -> Vec<ThemeDescriptor> {
        let mut themes = builtin_themes();
        themes.extend(self.scan().installed);
        themes
    }

    /// Listing wrapped with its total count.
    pub fn installed_themes(&self) -> InstalledThemes {
        InstalledThemes::new(self.list_installed_themes())
    }

    /// Find the descriptor for `slug`; built-ins take precedence over installed themes.
    pub fn resolve(&self, slug: &str) -> Option<ThemeDescriptor> {
        if let Some(descriptor) = builtin_theme(slug) {
            return Some(descriptor);
        }
        self.scan()
            .installed
            .into_iter()
            .find(|descriptor| descriptor.slug == slug)
    }
}
