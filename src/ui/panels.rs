use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use station_traffic::data::loader;
use station_traffic::traffic::filter::ANY_TIME_SLIDER;
use station_traffic::traffic::time::MINUTES_PER_DAY;

use crate::config::BUSIEST_ROWS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – time filter and busiest stations
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter by time");
    ui.separator();

    let mut value = state.filter.to_slider();
    let slider = egui::Slider::new(&mut value, ANY_TIME_SLIDER..=i32::from(MINUTES_PER_DAY) - 1)
        .show_value(false);
    if ui.add(slider).changed() {
        state.set_time_slider(value);
    }

    let label = RichText::new(state.time_label());
    if state.filter.is_any() {
        ui.label(label.italics().weak());
    } else {
        ui.label(label.strong());
    }

    ui.add_space(8.0);
    ui.heading("Busiest stations");
    ui.separator();

    if state.view.stations.is_empty() {
        ui.label("No stations loaded.");
        return;
    }

    let busiest = state.view.busiest(BUSIEST_ROWS);
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().clip(true))
        .columns(Column::auto(), 3)
        .header(20.0, |mut header| {
            for title in ["Station", "Trips", "Dep.", "Arr."] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for station in busiest {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(station.label()).on_hover_text(&station.id);
                    });
                    for count in [station.total_traffic, station.departures, station.arrivals] {
                        row.col(|ui: &mut Ui| {
                            ui.label(count.to_string());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open stations…").clicked() {
                open_stations_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open trips…").clicked() {
                open_trips_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open bike lanes…").clicked() {
                open_bike_lanes_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} stations, {} trips loaded",
            state.dataset.stations.len(),
            state.dataset.trips.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_stations_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open station metadata")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_stations(&path) {
            Ok(stations) => state.set_stations(stations),
            Err(e) => state.report_error(e),
        }
    }
}

pub fn open_trips_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open trip records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_trips(&path) {
            Ok(trips) => state.set_trips(trips),
            Err(e) => state.report_error(e),
        }
    }
}

pub fn open_bike_lanes_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Open bike-lane GeoJSON")
        .add_filter("GeoJSON", &["geojson", "json"])
        .pick_files();

    for path in files.unwrap_or_default() {
        match loader::load_bike_lanes(&path) {
            Ok(lanes) => state.add_bike_lanes(lanes),
            Err(e) => state.report_error(e),
        }
    }
}
