use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Station – one dock location
// ---------------------------------------------------------------------------

/// A bike-share dock location plus its traffic over some trip set.
///
/// `arrivals`, `departures` and `total_traffic` are derived. They are zero on
/// freshly loaded stations and only ever set by
/// [`aggregate`](crate::traffic::aggregate::aggregate), which writes them on
/// a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Stable identifier (the source's `short_name`), unique among stations.
    pub id: String,
    /// Human-readable name, when the source has one.
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub arrivals: u32,
    pub departures: u32,
    /// Always `arrivals + departures`.
    pub total_traffic: u32,
}

impl Station {
    /// A station with no traffic yet.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Station {
            id: id.into(),
            name: None,
            lat,
            lon,
            arrivals: 0,
            departures: 0,
            total_traffic: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name if present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Hover text for the station's marker.
    pub fn tooltip(&self) -> String {
        format!(
            "{} trips ({} departures, {} arrivals)",
            self.total_traffic, self.departures, self.arrivals
        )
    }
}

// ---------------------------------------------------------------------------
// Trip – one rental
// ---------------------------------------------------------------------------

/// A single rental. Station ids that match no [`Station`] are kept; they just
/// never count towards any station's traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// BikeLane – map overlay
// ---------------------------------------------------------------------------

/// One bike-lane polyline as `[lon, lat]` points, drawn under the markers.
#[derive(Debug, Clone, PartialEq)]
pub struct BikeLane {
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// Dataset – everything loaded for one session
// ---------------------------------------------------------------------------

/// Stations and trips as loaded. Read-only for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub stations: Vec<Station>,
    pub trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(stations: Vec<Station>, trips: Vec<Trip>) -> Self {
        Dataset { stations, trips }
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_lists_all_counts() {
        let mut station = Station::new("A32000", 42.36, -71.09);
        station.arrivals = 3;
        station.departures = 4;
        station.total_traffic = 7;
        assert_eq!(station.tooltip(), "7 trips (4 departures, 3 arrivals)");
    }

    #[test]
    fn label_prefers_name() {
        let station = Station::new("A32000", 0.0, 0.0);
        assert_eq!(station.label(), "A32000");
        let station = station.with_name("Kendall T");
        assert_eq!(station.label(), "Kendall T");
    }
}
