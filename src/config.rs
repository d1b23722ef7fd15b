use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Bike-share station traffic viewer.
#[derive(Parser, Debug, Clone)]
#[command(name = "station-traffic", version, about)]
pub struct Args {
    /// Station metadata (.json) to load on startup.
    #[arg(long)]
    pub stations: Option<PathBuf>,

    /// Trip records (.csv) to load on startup.
    #[arg(long)]
    pub trips: Option<PathBuf>,

    /// Bike-lane GeoJSON files drawn under the station markers.
    #[arg(long = "bike-lanes", num_args = 1..)]
    pub bike_lanes: Vec<PathBuf>,

    /// Initial time filter in minutes since midnight, -1 for any time.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub time: i32,
}

// ---------------------------------------------------------------------------
// Window defaults
// ---------------------------------------------------------------------------

pub const WINDOW_TITLE: &str = "Station Traffic";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

// ---------------------------------------------------------------------------
// Map defaults
// ---------------------------------------------------------------------------

/// Initial map centre as `[lon, lat]` (Cambridge / Boston).
pub const MAP_CENTER: [f64; 2] = [-71.09415, 42.36027];

/// Initial visible extent in degrees, `[lon, lat]`.
pub const MAP_SPAN: [f64; 2] = [0.12, 0.08];

/// `(x_bounds, y_bounds)` the map always includes when first shown.
pub fn initial_bounds() -> ([f64; 2], [f64; 2]) {
    let [lon, lat] = MAP_CENTER;
    let [w, h] = MAP_SPAN;
    ([lon - w / 2.0, lon + w / 2.0], [lat - h / 2.0, lat + h / 2.0])
}

/// Rows in the busiest-stations table.
pub const BUSIEST_ROWS: usize = 15;
