//! CLI entry point for themeswitch.

mod cli;

use clap::Parser;
use std::path::PathBuf;
use themeswitch::config::{load_config_with_source, Config};
use themeswitch::error::AppError;
use themeswitch::registry::ThemeRegistry;
use themeswitch::render::Renderer;
use themeswitch::service::ThemeService;
use themeswitch::settings::FileSettingsStore;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter (falls back to `RUST_LOG`).
const LOG_ENV: &str = "THEMESWITCH_LOG";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();

    let renderer = Renderer::new(!args.no_color);
    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };
    let renderer = Renderer::new(config.display.color);

    let service = ThemeService::new(
        FileSettingsStore::new(&config.store.path),
        ThemeRegistry::new(&config.themes.extensions_dir),
    );

    if let Err(e) = run_command(&service, &renderer, &args).await {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load config and layer command-line overrides on top.
fn resolve_config(args: &cli::Args) -> Result<Config, AppError> {
    let loaded = load_config_with_source(args.config.as_deref())?;
    let mut config = loaded.config;
    if let Some(path) = &args.store {
        config.store.path = PathBuf::from(path);
    }
    if let Some(dir) = &args.extensions_dir {
        config.themes.extensions_dir = PathBuf::from(dir);
    }
    if args.no_color {
        config.display.color = false;
    }
    tracing::debug!(
        source = ?loaded.source,
        store = %config.store.path.display(),
        extensions_dir = %config.themes.extensions_dir.display(),
        "effective configuration"
    );
    Ok(config)
}

async fn run_command(
    service: &ThemeService<FileSettingsStore>,
    renderer: &Renderer,
    args: &cli::Args,
) -> Result<(), AppError> {
    match &args.command {
        cli::Command::List => {
            let listing = service.installed_themes().await?;
            if args.json {
                return print_json(renderer, &listing);
            }
            let active = service.active_theme().await?;
            renderer.theme_list(&listing, &active.slug);
            if !listing.themes.iter().any(|theme| theme.slug == active.slug) {
                renderer.warn(&format!(
                    "active theme `{}` is no longer installed",
                    active.slug
                ));
            }
        }
        cli::Command::Active => {
            let record = service.active_theme().await?;
            if args.json {
                return print_json(renderer, &record);
            }
            renderer.record("active theme", &record);
        }
        cli::Command::Previous => {
            let record = service.previous_theme().await?;
            if args.json {
                return print_json(renderer, &record);
            }
            match record {
                Some(record) => renderer.record("previous theme", &record),
                None => {
                    renderer.section("previous theme");
                    renderer.detail("none");
                }
            }
        }
        cli::Command::Activate {
            slug,
            config_json,
            set,
        } => {
            let config = cli::activation_config(config_json.as_deref(), set)?;
            let record = service.activate_theme(slug, config).await?;
            if args.json {
                return print_json(renderer, &record);
            }
            renderer.record("activated theme", &record);
        }
        cli::Command::Rollback => {
            let record = service.rollback_theme().await?;
            if args.json {
                return print_json(renderer, &record);
            }
            renderer.record("rolled back to", &record);
        }
        cli::Command::SetConfig { entries } => {
            let partial = cli::parse_assignments(entries)?;
            let record = service.update_theme_config(partial).await?;
            if args.json {
                return print_json(renderer, &record);
            }
            renderer.record("active theme", &record);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(renderer: &Renderer, value: &T) -> Result<(), AppError> {
    renderer
        .json(value)
        .map_err(|e| AppError::Usage(format!("failed to encode output: {e}")))
}
