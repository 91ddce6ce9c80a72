//! Labdash Desktop — Dioxus shell for the sample-tracking dashboard.

use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use dioxus::prelude::*;

mod app;
mod badges;
mod modals;
mod notices;
mod search;
mod state;
mod table;

use app::App;
use state::AppState;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

/// Sample-tracking dashboard: worksheet search, status badges, samples table.
#[derive(Parser)]
#[command(name = "labdash", version, about, long_about = None)]
struct Cli {
    /// Path to the dashboard configuration file
    #[arg(long, default_value = labdash_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("labdash=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load config and dataset at startup (blocking) — store in the Mutex,
    // NOT in a signal; the runtime does not exist yet.
    match AppState::load(&cli.config) {
        Ok(initial_state) => {
            *INITIAL_STATE.lock().unwrap() = Some(initial_state);
        }
        Err(e) => {
            tracing::error!("startup failed: {e}");
            std::process::exit(1);
        }
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 250, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Labdash")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(760.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
