#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pillbar_core::{AppearanceMode, Catalog, HEADING};
use tracing_subscriber::EnvFilter;

/// Global startup configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Startup configuration for the root component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Title selected when the bar mounts
    pub initial: Option<String>,
    pub appearance: AppearanceMode,
}

/// Get the startup configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Accessories - category filter bar
#[derive(Parser, Debug)]
#[command(name = "pillbar-desktop")]
#[command(about = "Accessories filter bar with selectable category pills")]
struct Args {
    /// Filter selected on launch (defaults to "All Accessories")
    #[arg(short, long)]
    initial: Option<String>,

    /// Appearance mode: light or dark
    #[arg(short, long, default_value = "light")]
    appearance: AppearanceMode,

    /// Print the filter catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::accessories();

    if args.print_catalog {
        let json = serde_json::to_string_pretty(&catalog).context("failed to encode catalog")?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(ref title) = args.initial {
        if !catalog.contains(title) {
            bail!("unknown filter '{}' for --initial", title);
        }
    }

    let config = AppConfig {
        initial: args.initial,
        appearance: args.appearance,
    };
    tracing::info!(
        "Starting with filter {:?} in {} mode",
        config.initial.as_deref().unwrap_or(pillbar_core::DEFAULT_SELECTION),
        config.appearance
    );
    let _ = APP_CONFIG.set(config);

    // Wide enough for a few pills, the rest scrolls
    let window_width = 720.0;
    let window_height = 320.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(HEADING)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
