//! End-to-end theme lifecycle against a file-backed settings store.
//!
//! Each test builds an isolated temp directory holding the settings document
//! and an extensions directory with installed theme manifests.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use themeswitch::error::ThemeError;
use themeswitch::registry::ThemeRegistry;
use themeswitch::service::{ThemeService, ACTIVE_THEME_KEY, PREVIOUS_THEME_KEY};
use themeswitch::settings::{FileSettingsStore, SettingsStore};
use themeswitch::types::{ThemeConfig, ThemeSource};

static NEXT_DIR: AtomicU64 = AtomicU64::new(0);

struct Workspace {
    root: PathBuf,
}

impl Workspace {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "themeswitch-it-{name}-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(root.join("extensions")).expect("create workspace");
        Self { root }
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("state").join("settings.json")
    }

    fn extensions_dir(&self) -> PathBuf {
        self.root.join("extensions")
    }

    fn install(&self, dir: &str, manifest: &str) {
        let theme_dir = self.extensions_dir().join(dir);
        fs::create_dir_all(&theme_dir).expect("create theme dir");
        fs::write(theme_dir.join("theme.json"), manifest).expect("write manifest");
    }

    fn service(&self) -> ThemeService<FileSettingsStore> {
        ThemeService::new(
            FileSettingsStore::new(self.settings_path()),
            ThemeRegistry::new(self.extensions_dir()),
        )
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn read_document(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read settings")).expect("parse")
}

fn primary(color: &str) -> ThemeConfig {
    let mut config = ThemeConfig::new();
    config.insert("primaryColor".to_string(), json!(color));
    config
}

#[tokio::test]
async fn listing_skips_corrupt_manifest_and_keeps_builtins() {
    let ws = Workspace::new("listing");
    ws.install(
        "aurora",
        r#"{"slug": "aurora", "name": "Aurora", "version": "2.0.0", "category": "beauty"}"#,
    );
    ws.install("broken", r#"{"slug": "broken", "name": "#);

    let listing = ws.service().installed_themes().await.expect("listing");
    let slugs = listing
        .themes
        .iter()
        .map(|theme| theme.slug.as_str())
        .collect::<Vec<_>>();
    assert_eq!(listing.total, 3);
    assert_eq!(&slugs[..2], &["default", "yevbi"]);
    assert!(slugs.contains(&"aurora"));
    assert!(!slugs.contains(&"broken"));
}

#[tokio::test]
async fn activation_and_rollback_persist_across_service_instances() {
    let ws = Workspace::new("persist");
    ws.install(
        "aurora",
        r#"{"name": "Aurora", "version": "2.0.0", "author": "Northwind"}"#,
    );

    let first = ws.service();
    first
        .activate_theme("yevbi", Some(primary("#6610f2")))
        .await
        .expect("activate yevbi");
    let aurora = first
        .activate_theme("aurora", None)
        .await
        .expect("activate aurora");
    assert_eq!(aurora.source, ThemeSource::Installed);
    assert_eq!(aurora.version, "2.0.0");
    assert!(aurora.config.is_empty());

    let document = read_document(&ws.settings_path());
    assert_eq!(document["version"], json!(1));
    assert_eq!(document["settings"][ACTIVE_THEME_KEY]["slug"], json!("aurora"));
    assert_eq!(document["settings"][PREVIOUS_THEME_KEY]["slug"], json!("yevbi"));

    let second = ws.service();
    let restored = second.rollback_theme().await.expect("rollback");
    assert_eq!(restored.slug, "yevbi");
    assert_eq!(restored.config, primary("#6610f2"));
    let previous = second
        .previous_theme()
        .await
        .expect("previous")
        .expect("present");
    assert_eq!(previous.slug, "aurora");
}

#[tokio::test]
async fn unknown_slug_leaves_settings_file_untouched() {
    let ws = Workspace::new("unknown");
    let service = ws.service();
    service
        .activate_theme("yevbi", None)
        .await
        .expect("activate");
    let before = fs::read_to_string(ws.settings_path()).expect("read");

    let err = service
        .activate_theme("missing-theme", None)
        .await
        .expect_err("must fail");
    assert!(matches!(err, ThemeError::NotFound(_)));
    assert_eq!(err.to_string(), "theme `missing-theme` not found");
    assert_eq!(fs::read_to_string(ws.settings_path()).expect("read"), before);
}

#[tokio::test]
async fn theme_removed_from_disk_stays_active_until_changed() {
    let ws = Workspace::new("removed");
    ws.install("aurora", r#"{"name": "Aurora", "version": "1.0.0"}"#);
    let service = ws.service();
    service
        .activate_theme("aurora", Some(primary("#222222")))
        .await
        .expect("activate");

    fs::remove_dir_all(ws.extensions_dir().join("aurora")).expect("uninstall");

    let active = service.active_theme().await.expect("active");
    assert_eq!(active.slug, "aurora");
    let updated = service
        .update_theme_config(primary("#333333"))
        .await
        .expect("update still allowed");
    assert_eq!(updated.config, primary("#333333"));
    let err = service
        .activate_theme("aurora", None)
        .await
        .expect_err("no longer resolvable");
    assert!(matches!(err, ThemeError::NotFound(_)));
}

#[tokio::test]
async fn store_trait_object_backs_the_service() {
    let ws = Workspace::new("dyn");
    let store: std::sync::Arc<dyn SettingsStore> =
        std::sync::Arc::new(FileSettingsStore::new(ws.settings_path()));
    let service = ThemeService::new(store.clone(), ThemeRegistry::builtin_only());

    service
        .activate_theme("yevbi", Some(primary("#6610f2")))
        .await
        .expect("activate");
    let raw = store
        .get_setting(ACTIVE_THEME_KEY)
        .await
        .expect("get")
        .expect("written");
    assert_eq!(raw["config"]["primaryColor"], json!("#6610f2"));
    assert_eq!(raw["source"], json!("builtin"));
}
