#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod motion;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::PortfolioContent;
use tracing_subscriber::EnvFilter;

use crate::context::PageSettings;

/// Global page settings, set from command line
static SETTINGS: OnceLock<PageSettings> = OnceLock::new();

/// Global page content, loaded once at startup
static CONTENT: OnceLock<PortfolioContent> = OnceLock::new();

/// Get the page settings (set from command line or default)
pub fn get_settings() -> PageSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Get the page content (loaded from file or built in)
pub fn get_content() -> PortfolioContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Folio - single-page personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a single-page personal portfolio")]
struct Args {
    /// JSON content file (defaults to <config dir>/folio/content.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Milliseconds between slideshow advances
    #[arg(long, default_value_t = 5000)]
    slide_interval_ms: u64,

    /// Disable scroll/hover/click animations
    #[arg(long)]
    no_motion: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Content file used when none is given on the command line
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("folio").join("content.json"))
        .filter(|path| path.exists())
}

fn load_content(path: &Path) -> anyhow::Result<PortfolioContent> {
    PortfolioContent::load(path)
        .with_context(|| format!("failed to load content from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio=info,folio_core=info")),
        )
        .init();

    let args = Args::parse();

    let content = match args.content.clone().or_else(default_content_path) {
        Some(path) => load_content(&path)?,
        None => {
            tracing::info!("No content file, using built-in content");
            PortfolioContent::default()
        }
    };

    let settings = PageSettings {
        slide_interval: Duration::from_millis(args.slide_interval_ms),
        motion: !args.no_motion,
    };

    tracing::info!(
        owner = %content.owner.name,
        slide_interval_ms = args.slide_interval_ms,
        motion = settings.motion,
        "Starting Folio"
    );

    let title = format!("{} - Portfolio", content.owner.name);

    let _ = SETTINGS.set(settings);
    let _ = CONTENT.set(content);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
