use std::collections::HashMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, Points};

use crate::config::initial_bounds;
use crate::state::AppState;

/// Steelblue (70, 130, 180) at 80% opacity, premultiplied.
const MARKER_FILL: Color32 = Color32::from_rgba_premultiplied(56, 104, 144, 204);

/// White 1px rim around each marker, same opacity as the fill.
const MARKER_RIM: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);
const MARKER_RIM_WIDTH: f32 = 1.0;

/// #32D400 at 50% opacity, premultiplied.
const LANE_COLOR: Color32 = Color32::from_rgba_premultiplied(25, 106, 0, 128);
const LANE_WIDTH: f32 = 3.0;

// ---------------------------------------------------------------------------
// Station map (central panel)
// ---------------------------------------------------------------------------

/// Draw bike lanes, then one marker per station at `[lon, lat]` sized by the
/// current view's radius scale. Pan and zoom are handled by the plot, so
/// markers always stay on their stations.
pub fn station_map(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() && state.bike_lanes.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open station and trip files to view traffic  (File → Open…)");
        });
        return;
    }

    let view = &state.view;
    let tooltips: HashMap<String, String> = view
        .stations
        .iter()
        .map(|s| (s.id.clone(), format!("{}\n{}", s.label(), s.tooltip())))
        .collect();

    let (x_bounds, y_bounds) = initial_bounds();

    Plot::new("station_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .show_grid(false)
        .include_x(x_bounds[0])
        .include_x(x_bounds[1])
        .include_y(y_bounds[0])
        .include_y(y_bounds[1])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, point| match tooltips.get(name) {
            Some(text) => text.clone(),
            None => format!("{:.5}, {:.5}", point.y, point.x),
        })
        .show(ui, |plot_ui| {
            for lane in &state.bike_lanes {
                plot_ui.line(
                    Line::new(lane.points.clone())
                        .color(LANE_COLOR)
                        .width(LANE_WIDTH),
                );
            }

            for station in &view.stations {
                let radius = view.radius(station) as f32;
                let pos = vec![[station.lon, station.lat]];
                // The plot has no marker outline, so the rim is a slightly
                // larger disc underneath the fill.
                plot_ui.points(
                    Points::new(pos.clone())
                        .name(&station.id)
                        .radius(radius + MARKER_RIM_WIDTH)
                        .color(MARKER_RIM)
                        .filled(true),
                );
                plot_ui.points(
                    Points::new(pos)
                        .name(&station.id)
                        .radius(radius)
                        .color(MARKER_FILL)
                        .filled(true),
                );
            }
        });
}
