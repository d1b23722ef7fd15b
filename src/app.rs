use eframe::egui;

use crate::state::AppState;
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Renders `AppState` and feeds user input back into it. All traffic numbers
/// come from `AppState::view`; nothing is computed while drawing.
pub struct StationTrafficApp {
    pub state: AppState,
}

impl StationTrafficApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for StationTrafficApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: time filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: station map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::station_map(ui, &self.state);
        });
    }
}
