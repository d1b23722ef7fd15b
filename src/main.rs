mod app;
mod config;
mod state;
mod ui;

use app::StationTrafficApp;
use clap::Parser;
use eframe::egui;

use config::{Args, MIN_WINDOW_SIZE, WINDOW_SIZE, WINDOW_TITLE};
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    let state = AppState::from_args(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(StationTrafficApp::new(state)))),
    )
}
