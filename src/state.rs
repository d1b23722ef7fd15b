use anyhow::Context;

use station_traffic::data::loader;
use station_traffic::data::model::{BikeLane, Dataset, Station, Trip};
use station_traffic::traffic::{self, StationView, TimeFilter};

use crate::config::Args;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Stations and trips loaded so far (either may still be empty).
    pub dataset: Dataset,

    /// Current time-of-day selection.
    pub filter: TimeFilter,

    /// Map overlay lines, independent of the traffic pipeline.
    pub bike_lanes: Vec<BikeLane>,

    /// Pipeline output for `dataset` under `filter` (cached).
    pub view: StationView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            bike_lanes: Vec::new(),
            filter: TimeFilter::Any,
            view: traffic::update(&[], &[], TimeFilter::Any),
            status_message: None,
        }
    }
}

impl AppState {
    /// Build the initial state from command-line options, preloading any
    /// files given there. Load failures and a rejected `--time` end up in
    /// `status_message`; the time is applied after loading so a successful
    /// load cannot clear its error.
    pub fn from_args(args: &Args) -> Self {
        let mut state = Self::default();

        let loaded = match (&args.stations, &args.trips) {
            (Some(stations), Some(trips)) => {
                loader::load_dataset(stations, trips).map(|ds| state.set_dataset(ds))
            }
            (Some(stations), None) => {
                loader::load_stations(stations).map(|s| state.set_stations(s))
            }
            (None, Some(trips)) => loader::load_trips(trips).map(|t| state.set_trips(t)),
            (None, None) => Ok(()),
        };
        if let Err(e) = loaded {
            state.report_error(e);
        }

        for path in &args.bike_lanes {
            match loader::load_bike_lanes(path) {
                Ok(lanes) => state.add_bike_lanes(lanes),
                Err(e) => state.report_error(e),
            }
        }

        state.set_time_slider(args.time);
        state
    }

    /// Ingest a newly loaded dataset and recompute the view.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.loaded();
    }

    pub fn set_stations(&mut self, stations: Vec<Station>) {
        log::info!("Loaded {} stations", stations.len());
        self.dataset.stations = stations;
        self.loaded();
    }

    pub fn set_trips(&mut self, trips: Vec<Trip>) {
        log::info!("Loaded {} trips", trips.len());
        self.dataset.trips = trips;
        self.loaded();
    }

    /// Add overlay lines; earlier files stay loaded.
    pub fn add_bike_lanes(&mut self, lanes: Vec<BikeLane>) {
        self.bike_lanes.extend(lanes);
    }

    fn loaded(&mut self) {
        self.refresh();
        self.status_message = None;
    }

    /// Apply a raw slider value (`-1..=1439`).
    pub fn set_time_slider(&mut self, value: i32) {
        match TimeFilter::from_slider(value).context("time slider") {
            Ok(filter) => self.set_time_filter(filter),
            Err(e) => self.report_error(e),
        }
    }

    /// Change the filter; the pipeline only reruns when it actually changed.
    pub fn set_time_filter(&mut self, filter: TimeFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.refresh();
    }

    /// Recompute `view` from the dataset and the current filter.
    pub fn refresh(&mut self) {
        self.view = traffic::update(&self.dataset.stations, &self.dataset.trips, self.filter);
    }

    /// Text next to the slider: the selected time or "(any time)".
    pub fn time_label(&self) -> String {
        match self.filter {
            TimeFilter::Any => "(any time)".to_string(),
            TimeFilter::Around(minute) => minute.to_string(),
        }
    }

    pub fn report_error(&mut self, e: anyhow::Error) {
        log::error!("{e:#}");
        self.status_message = Some(format!("Error: {e:#}"));
    }
}
