//! Themes compiled into the crate.

use crate::types::{ThemeDescriptor, ThemeSource};

/// Slug of the theme used when nothing was ever activated.
pub const DEFAULT_THEME_SLUG: &str = "default";

struct BuiltinTheme {
    slug: &'static str,
    name: &'static str,
    version: &'static str,
    description: &'static str,
    category: &'static str,
}

const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        slug: DEFAULT_THEME_SLUG,
        name: "Default",
        version: "1.0.0",
        description: "Clean general-purpose storefront layout.",
        category: "general",
    },
    BuiltinTheme {
        slug: "yevbi",
        name: "Yevbi",
        version: "1.0.0",
        description: "Editorial fashion storefront with large product imagery.",
        category: "fashion",
    },
];

const BUILTIN_AUTHOR: &str = "Storefront";

impl BuiltinTheme {
    fn descriptor(&self) -> ThemeDescriptor {
        ThemeDescriptor {
            slug: self.slug.to_string(),
            name: self.name.to_string(),
            version: self.version.to_string(),
            description: Some(self.description.to_string()),
            author: Some(BUILTIN_AUTHOR.to_string()),
            category: Some(self.category.to_string()),
            preview_image: Some(format!("/themes/{}/preview.png", self.slug)),
            source: ThemeSource::Builtin,
        }
    }
}

/// Every built-in descriptor, in catalogue order.
pub fn builtin_themes() -> Vec<ThemeDescriptor> {
    BUILTIN_THEMES.iter().map(BuiltinTheme::descriptor).collect()
}

/// Built-in descriptor for `slug`, if any.
pub fn builtin_theme(slug: &str) -> Option<ThemeDescriptor> {
    BUILTIN_THEMES
        .iter()
        .find(|theme| theme.slug == slug)
        .map(BuiltinTheme::descriptor)
}

/// Descriptor of the fallback theme.
pub fn default_theme() -> ThemeDescriptor {
    BUILTIN_THEMES[0].descriptor()
}
