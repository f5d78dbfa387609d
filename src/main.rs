//! Ringlet - an animated circular progress ring
//! Built with iced; the preview retargets the ring to random values

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Run as a daemon so closing the window goes through RequestClose,
    // which saves settings before exiting
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
