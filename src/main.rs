#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppConfig;

/// Global app configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or defaults)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Keepsake - an animated birthday greeting
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - an animated birthday greeting for one special day")]
struct Args {
    /// Directory holding the per-year photo folders (e.g. memories/2021/*.jpg)
    #[arg(short, long)]
    media_dir: Option<PathBuf>,

    /// Data directory for the persisted theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Name of the birthday person
    #[arg(long, default_value = "Meryem")]
    friend_name: String,

    /// Name of the sender
    #[arg(long, default_value = "Your Friend")]
    sender_name: String,

    /// Birthdate as YYYY-MM-DD, drives the countdown target and the age
    #[arg(long, default_value = "2003-11-12")]
    birthdate: chrono::NaiveDate,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let media_dir = args.media_dir.unwrap_or_else(|| PathBuf::from("memories"));
    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake")
    });

    let config = AppConfig {
        media_dir,
        data_dir,
        friend_name: args.friend_name,
        sender_name: args.sender_name,
        birthdate: args.birthdate,
    };
    tracing::info!(
        "Starting Keepsake for {} with media dir: {:?}",
        config.friend_name,
        config.media_dir
    );
    let _ = CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Keepsake")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
