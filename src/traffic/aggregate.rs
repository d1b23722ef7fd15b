use std::collections::HashMap;

use crate::data::model::{Station, Trip};

/// Count trips per station id, keyed by whichever end `key` picks.
fn rollup<'a, I, F>(trips: I, key: F) -> HashMap<&'a str, u32>
where
    I: IntoIterator<Item = &'a Trip>,
    F: Fn(&'a Trip) -> &'a str,
{
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for trip in trips {
        *counts.entry(key(trip)).or_default() += 1;
    }
    counts
}

/// Annotate every station with its arrivals, departures and total traffic over
/// `trips`.
///
/// Returns copies in the input order; only the three traffic fields differ from
/// the input. Trips whose station ids match no station are ignored, and
/// stations without trips get zero.
pub fn aggregate<'a, I>(stations: &[Station], trips: I) -> Vec<Station>
where
    I: IntoIterator<Item = &'a Trip>,
    I::IntoIter: Clone,
{
    let trips = trips.into_iter();
    let departures = rollup(trips.clone(), |trip| trip.start_station_id.as_str());
    let arrivals = rollup(trips, |trip| trip.end_station_id.as_str());

    stations
        .iter()
        .map(|station| {
            let id = station.id.as_str();
            let arrivals = arrivals.get(id).copied().unwrap_or(0);
            let departures = departures.get(id).copied().unwrap_or(0);
            Station {
                arrivals,
                departures,
                total_traffic: arrivals + departures,
                ..station.clone()
            }
        })
        .collect()
}
