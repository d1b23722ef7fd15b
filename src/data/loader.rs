use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use geojson::{GeoJson, Geometry, Value as GeoValue};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use super::model::{BikeLane, Dataset, Station, Trip};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both datasets for a session.
pub fn load_dataset(stations_path: &Path, trips_path: &Path) -> Result<Dataset> {
    let stations = load_stations(stations_path)?;
    let trips = load_trips(trips_path)?;
    log::info!(
        "Loaded {} stations and {} trips",
        stations.len(),
        trips.len()
    );
    Ok(Dataset::new(stations, trips))
}

/// Load station metadata from a `.json` file.
pub fn load_stations(path: &Path) -> Result<Vec<Station>> {
    check_extension(path, &["json"])?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening stations file {}", path.display()))?;
    read_stations(std::io::BufReader::new(file))
        .with_context(|| format!("loading stations from {}", path.display()))
}

/// Load trip records from a `.csv` file.
pub fn load_trips(path: &Path) -> Result<Vec<Trip>> {
    check_extension(path, &["csv"])?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening trips file {}", path.display()))?;
    read_trips(file).with_context(|| format!("loading trips from {}", path.display()))
}

/// Load bike-lane polylines from a `.geojson` / `.json` file.
pub fn load_bike_lanes(path: &Path) -> Result<Vec<BikeLane>> {
    check_extension(path, &["geojson", "json"])?;
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening bike lanes file {}", path.display()))?;
    let lanes = read_bike_lanes(std::io::BufReader::new(file))
        .with_context(|| format!("loading bike lanes from {}", path.display()))?;
    log::info!("Loaded {} bike-lane lines from {}", lanes.len(), path.display());
    Ok(lanes)
}

fn check_extension(path: &Path, expected: &[&str]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !expected.contains(&ext.as_str()) {
        bail!(
            "Unsupported file extension: .{ext} (expected .{})",
            expected.join(" or .")
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Station JSON
// ---------------------------------------------------------------------------

/// Accepted JSON shapes:
///
/// ```json
/// { "data": { "stations": [ { "short_name": "A32000", "lat": 42.36, "lon": -71.09, "name": "..." } ] } }
/// ```
///
/// or the bare array of station objects. `id` is accepted in place of
/// `short_name`, and `lat` / `lon` may be numeric strings.
pub fn read_stations<R: Read>(reader: R) -> Result<Vec<Station>> {
    let root: JsonValue = serde_json::from_reader(reader).context("parsing JSON")?;

    let records = match &root {
        JsonValue::Array(records) => records,
        other => other
            .pointer("/data/stations")
            .and_then(|v| v.as_array())
            .context("Expected a top-level array or a data.stations array")?,
    };

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Station {i} is not a JSON object"))?;
            json_to_station(obj, i)
        })
        .collect()
}

fn json_to_station(obj: &Map<String, JsonValue>, row: usize) -> Result<Station> {
    let id = obj
        .get("short_name")
        .or_else(|| obj.get("id"))
        .and_then(json_to_id)
        .with_context(|| format!("Station {row}: missing 'short_name'"))?;

    let lat = json_to_f64(obj.get("lat"), row, "lat")?;
    let lon = json_to_f64(obj.get("lon"), row, "lon")?;

    let mut station = Station::new(id, lat, lon);
    if let Some(name) = obj.get("name").and_then(|v| v.as_str()) {
        station = station.with_name(name);
    }
    Ok(station)
}

fn json_to_id(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_to_f64(val: Option<&JsonValue>, row: usize, field: &str) -> Result<f64> {
    match val {
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .with_context(|| format!("Station {row}: '{field}' is not a finite number")),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Station {row}: '{field}' = '{s}' is not a number")),
        Some(other) => bail!("Station {row}: '{field}' has unexpected value {other}"),
        None => bail!("Station {row}: missing '{field}'"),
    }
}

// ---------------------------------------------------------------------------
// Trip CSV
// ---------------------------------------------------------------------------

/// One CSV row. Extra columns (ride id, bike type, membership, ...) are
/// ignored.
#[derive(Deserialize)]
struct TripRecord {
    start_station_id: String,
    end_station_id: String,
    started_at: String,
    ended_at: String,
}

/// CSV layout: header row naming at least `start_station_id`,
/// `end_station_id`, `started_at` and `ended_at`.
pub fn read_trips<R: Read>(reader: R) -> Result<Vec<Trip>> {
    let mut trips = Vec::new();

    for (row_no, result) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        let rec: TripRecord = result.with_context(|| format!("CSV row {row_no}"))?;

        let started_at = parse_timestamp(&rec.started_at)
            .with_context(|| format!("CSV row {row_no}: started_at"))?;
        let ended_at = parse_timestamp(&rec.ended_at)
            .with_context(|| format!("CSV row {row_no}: ended_at"))?;

        trips.push(Trip {
            start_station_id: rec.start_station_id,
            end_station_id: rec.end_station_id,
            started_at,
            ended_at,
        });
    }

    Ok(trips)
}

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a local timestamp with optional fractional seconds.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .with_context(|| format!("'{s}' is not a timestamp"))
}

// ---------------------------------------------------------------------------
// Bike-lane GeoJSON
// ---------------------------------------------------------------------------

/// Any GeoJSON document: a FeatureCollection, a single Feature or a bare
/// Geometry. LineString and MultiLineString geometries become one
/// [`BikeLane`] per line, geometry collections are walked, everything else
/// (points, polygons, features without geometry) is skipped.
pub fn read_bike_lanes<R: Read>(reader: R) -> Result<Vec<BikeLane>> {
    let doc: GeoJson = serde_json::from_reader(reader).context("parsing GeoJSON")?;

    let mut lanes = Vec::new();
    match &doc {
        GeoJson::FeatureCollection(collection) => {
            for (i, feature) in collection.features.iter().enumerate() {
                if let Some(geometry) = &feature.geometry {
                    collect_lines(geometry, &mut lanes)
                        .with_context(|| format!("Feature {i}"))?;
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = &feature.geometry {
                collect_lines(geometry, &mut lanes)?;
            }
        }
        GeoJson::Geometry(geometry) => collect_lines(geometry, &mut lanes)?,
    }
    Ok(lanes)
}

fn collect_lines(geometry: &Geometry, out: &mut Vec<BikeLane>) -> Result<()> {
    match &geometry.value {
        GeoValue::LineString(line) => out.push(to_lane(line)?),
        GeoValue::MultiLineString(lines) => {
            for line in lines {
                out.push(to_lane(line)?);
            }
        }
        GeoValue::GeometryCollection(geometries) => {
            for g in geometries {
                collect_lines(g, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn to_lane(line: &[Vec<f64>]) -> Result<BikeLane> {
    let points = line
        .iter()
        .enumerate()
        .map(|(j, pos)| match pos.as_slice() {
            [lon, lat, ..] => Ok([*lon, *lat]),
            _ => bail!("position {j} has fewer than two coordinates"),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(BikeLane { points })
}
