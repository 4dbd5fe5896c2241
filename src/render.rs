//! Terminal output for the command-line front end.
//!
//! Results go to stdout; warnings and errors go to stderr.

use crate::types::{ActiveThemeRecord, InstalledThemes, ThemeDescriptor};
use crossterm::style::{Color, Stylize};

const INDENT: &str = "  ";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const ACTIVE_MARKER: &str = "*";

/// Plain or colored terminal renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.color {
            println!("{} {}", "•".with(Color::DarkGrey), title.with(Color::Cyan).bold());
        } else {
            println!("{title}:");
        }
    }

    /// Print one key/value row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            println!(
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White)
            );
        } else {
            println!("{INDENT}{key}: {value}");
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        if self.color {
            println!("{INDENT}{}", text.with(Color::Grey));
        } else {
            println!("{INDENT}{text}");
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print the theme catalogue, marking `active_slug`.
    pub fn theme_list(&self, listing: &InstalledThemes, active_slug: &str) {
        self.section(&format!("themes ({})", listing.total));
        for descriptor in &listing.themes {
            let active = descriptor.slug == active_slug;
            let line = theme_list_line(descriptor, active);
            if self.color && active {
                println!("{}", line.with(Color::Green).bold());
            } else {
                println!("{line}");
            }
        }
    }

    /// Print one register's record under `title`.
    pub fn record(&self, title: &str, record: &ActiveThemeRecord) {
        self.section(title);
        self.field("slug", &record.slug);
        self.field("version", &record.version);
        self.field("source", record.source.as_str());
        self.field("activated_at", &record.activated_at.to_string());
        if record.config.is_empty() {
            self.field("config", "{}");
        } else {
            self.field("config", "");
            for (key, value) in &record.config {
                self.detail(&format!("{INDENT}{key} = {value}"));
            }
        }
    }

    /// Print a serializable value as pretty JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// One catalogue row: `<marker> <slug> <version> [<source>] <name>`.
pub fn theme_list_line(descriptor: &ThemeDescriptor, active: bool) -> String {
    let marker = if active { ACTIVE_MARKER } else { " " };
    format!(
        "{INDENT}{marker} {:<16} {:<10} [{}] {}",
        descriptor.slug,
        descriptor.version,
        descriptor.source.as_str(),
        descriptor.name
    )
}
