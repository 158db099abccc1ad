//! SuperTodo Desktop Application
//!
//! Sticky-note card that is dragged onto save/delete targets, next to the
//! list of notes stored on the backend.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("supertodo=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting SuperTodo...");

    let window = WindowBuilder::new()
        .with_title("SuperTodo")
        .with_inner_size(LogicalSize::new(1000.0, 700.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
