//! Themeswitch: storefront theme registry and activation state machine.
//!
//! Themes come from a built-in catalogue plus `theme.json` manifests found in
//! an extensions directory. The active theme and the one it replaced are kept
//! in a key-value settings store, which allows single-step rollback.
//!
//! # Quick start
//!
//! ```no_run
//! use themeswitch::registry::ThemeRegistry;
//! use themeswitch::service::ThemeService;
//! use themeswitch::settings::FileSettingsStore;
//!
//! # async fn example() {
//! let service = ThemeService::new(
//!     FileSettingsStore::new("settings.json"),
//!     ThemeRegistry::new("extensions/themes"),
//! );
//! let active = service.activate_theme("yevbi", None).await.unwrap();
//! println!("active: {}", active.slug);
//! service.rollback_theme().await.unwrap();
//! # }
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod service;
pub mod settings;
#[cfg(test)]
pub mod testsupport;
pub mod types;
