use super::aggregate::aggregate;
use super::filter::{filter_by_time, TimeFilter};
use super::scale::RadiusScale;
use crate::data::model::{Station, Trip};

// ---------------------------------------------------------------------------
// Radius range policy
// ---------------------------------------------------------------------------

/// Marker radii over the whole, unfiltered trip set.
pub const ANY_TIME_RANGE: [f64; 2] = [0.0, 25.0];

/// Marker radii while a minute is selected. Wider, so differences stay visible
/// in the much smaller filtered set.
pub const FILTERED_RANGE: [f64; 2] = [3.0, 50.0];

pub fn radius_range(filter: TimeFilter) -> [f64; 2] {
    match filter {
        TimeFilter::Any => ANY_TIME_RANGE,
        TimeFilter::Around(_) => FILTERED_RANGE,
    }
}

// ---------------------------------------------------------------------------
// StationView – what the renderer binds to
// ---------------------------------------------------------------------------

/// Annotated stations plus the scale to size their markers with.
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    /// Stations in input order, traffic counted over the filtered trips.
    pub stations: Vec<Station>,
    pub scale: RadiusScale,
}

impl StationView {
    pub fn radius_domain(&self) -> [f64; 2] {
        self.scale.domain
    }

    pub fn radius_range(&self) -> [f64; 2] {
        self.scale.range
    }

    /// Marker radius for one station.
    pub fn radius(&self, station: &Station) -> f64 {
        self.scale.radius(f64::from(station.total_traffic))
    }

    /// Highest-traffic stations first, ties by id; at most `n`.
    pub fn busiest(&self, n: usize) -> Vec<&Station> {
        let mut ranked: Vec<&Station> = self.stations.iter().collect();
        ranked.sort_by(|a, b| {
            b.total_traffic
                .cmp(&a.total_traffic)
                .then_with(|| a.id.cmp(&b.id))
        });
        ranked.truncate(n);
        ranked
    }

    /// Sum of traffic across all stations.
    pub fn total_traffic(&self) -> u64 {
        self.stations
            .iter()
            .map(|s| u64::from(s.total_traffic))
            .sum()
    }
}

/// Run the pipeline for one filter value: filter trips, count traffic per
/// station and pick the radius scale.
///
/// Pure: the same arguments always give the same view. Call it again whenever
/// the filter changes.
pub fn update(stations: &[Station], trips: &[Trip], filter: TimeFilter) -> StationView {
    let filtered = filter_by_time(trips, filter);
    log::debug!("Filtered trips: {} of {}", filtered.len(), trips.len());

    let stations = aggregate(stations, filtered.iter().copied());
    log::debug!("Updated {} stations", stations.len());

    let max_traffic = stations.iter().map(|s| s.total_traffic).max().unwrap_or(0);
    let scale = RadiusScale::new([0.0, f64::from(max_traffic)], radius_range(filter));

    StationView { stations, scale }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic::time::MinuteOfDay;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at_minute(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(minute / 60, minute % 60, 0)
            .unwrap()
    }

    fn trip(from: &str, to: &str, start: u32, end: u32) -> Trip {
        Trip {
            start_station_id: from.to_string(),
            end_station_id: to.to_string(),
            started_at: at_minute(start),
            ended_at: at_minute(end),
        }
    }

    fn fixture() -> (Vec<Station>, Vec<Trip>) {
        let stations = vec![
            Station::new("A", 42.36, -71.09),
            Station::new("B", 42.37, -71.10),
            Station::new("C", 42.35, -71.06),
        ];
        let trips = vec![
            trip("A", "B", 480, 495),
            trip("A", "C", 540, 560),
            trip("B", "A", 600, 610),
            trip("C", "A", 1020, 1045),
            trip("C", "B", 1380, 1400),
        ];
        (stations, trips)
    }

    fn at(minute: i64) -> TimeFilter {
        TimeFilter::Around(MinuteOfDay::new(minute).unwrap())
    }

    #[test]
    fn range_switches_with_filter() {
        let (stations, trips) = fixture();
        assert_eq!(update(&stations, &trips, TimeFilter::Any).radius_range(), [0.0, 25.0]);
        assert_eq!(update(&stations, &trips, at(600)).radius_range(), [3.0, 50.0]);
    }

    #[test]
    fn unfiltered_counts_everything() {
        let (stations, trips) = fixture();
        let view = update(&stations, &trips, TimeFilter::Any);
        let totals: Vec<u32> = view.stations.iter().map(|s| s.total_traffic).collect();
        assert_eq!(totals, vec![4, 3, 3]);
        assert_eq!(view.radius_domain(), [0.0, 4.0]);
        assert_eq!(view.total_traffic(), 10);
    }

    #[test]
    fn filtered_counts_only_the_window() {
        let (stations, trips) = fixture();
        // 10:00 keeps the 9:00 and 10:00 trips; 8:00 → 8:15 ends 105 minutes early.
        let view = update(&stations, &trips, at(600));
        let totals: Vec<(&str, u32)> = view
            .stations
            .iter()
            .map(|s| (s.id.as_str(), s.total_traffic))
            .collect();
        assert_eq!(totals, vec![("A", 2), ("B", 1), ("C", 1)]);
        assert_eq!(view.radius_domain(), [0.0, 2.0]);
        assert_eq!(view.radius(&view.stations[0]), 50.0);
    }

    #[test]
    fn input_stations_are_not_mutated() {
        let (stations, trips) = fixture();
        let before = stations.clone();
        let _ = update(&stations, &trips, TimeFilter::Any);
        assert_eq!(stations, before);
    }

    #[test]
    fn update_is_idempotent() {
        let (stations, trips) = fixture();
        let first = update(&stations, &trips, at(1000));
        let second = update(&stations, &trips, at(1000));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input() {
        let view = update(&[], &[], TimeFilter::Any);
        assert!(view.stations.is_empty());
        assert_eq!(view.radius_domain(), [0.0, 0.0]);
        assert_eq!(view.scale.radius(12.0), 0.0);
    }

    #[test]
    fn no_matching_trips_maps_to_range_start() {
        let (stations, trips) = fixture();
        let view = update(&stations, &trips, at(180));
        assert_eq!(view.radius_domain(), [0.0, 0.0]);
        assert!(view.stations.iter().all(|s| view.radius(s) == 3.0));
    }

    #[test]
    fn busiest_orders_by_traffic_then_id() {
        let (stations, trips) = fixture();
        let view = update(&stations, &trips, TimeFilter::Any);
        let ids: Vec<&str> = view.busiest(2).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(view.busiest(10).len(), 3);
    }
}
