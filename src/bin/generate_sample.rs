use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::json;

const CENTER_LAT: f64 = 42.36027;
const CENTER_LON: f64 = -71.09415;
const N_STATIONS: usize = 60;
const N_TRIPS: usize = 20_000;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Index in `0..n`, skewed towards small indices so a few stations are busy.
    fn popular_index(&mut self, n: usize) -> usize {
        let u = self.next_f64();
        ((u * u) * n as f64) as usize % n
    }
}

#[derive(Serialize)]
struct TripRow {
    ride_id: String,
    started_at: String,
    ended_at: String,
    start_station_id: String,
    end_station_id: String,
}

fn station_id(i: usize) -> String {
    format!("S{:05}", 32000 + i)
}

/// Start minute with a morning and an evening peak plus background traffic.
fn start_minute(rng: &mut SimpleRng) -> i64 {
    let pick = rng.next_f64();
    let minute = if pick < 0.4 {
        rng.gauss(8.5 * 60.0, 60.0)
    } else if pick < 0.8 {
        rng.gauss(17.5 * 60.0, 75.0)
    } else {
        rng.next_f64() * 1440.0
    };
    (minute as i64).clamp(0, 1439)
}

fn timestamp(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let stations: Vec<_> = (0..N_STATIONS)
        .map(|i| {
            json!({
                "short_name": station_id(i),
                "name": format!("Sample Dock {}", i + 1),
                "lat": rng.gauss(CENTER_LAT, 0.015),
                "lon": rng.gauss(CENTER_LON, 0.025),
            })
        })
        .collect();
    let doc = json!({ "data": { "stations": stations } });

    let stations_path = "sample_stations.json";
    let file = std::fs::File::create(stations_path).context("creating stations file")?;
    serde_json::to_writer_pretty(file, &doc).context("writing stations")?;

    let trips_path = "sample_trips.csv";
    let mut writer = csv::Writer::from_path(trips_path).context("creating trips file")?;
    for n in 0..N_TRIPS {
        let day = 1 + (rng.next_u64() % 31) as u32;
        let date = NaiveDate::from_ymd_opt(2024, 3, day).context("invalid sample date")?;
        let started_at =
            date.and_time(chrono::NaiveTime::MIN) + Duration::minutes(start_minute(&mut rng));
        let ended_at = started_at + Duration::seconds(rng.gauss(900.0, 300.0).max(60.0) as i64);

        let from = rng.popular_index(N_STATIONS);
        // Roughly 1 in 100 trips ends at a dock missing from the station list.
        let to = if rng.next_f64() < 0.01 {
            "RETIRED-DOCK".to_string()
        } else {
            station_id(rng.popular_index(N_STATIONS))
        };

        writer
            .serialize(TripRow {
                ride_id: format!("R{n:06}"),
                started_at: timestamp(started_at),
                ended_at: timestamp(ended_at),
                start_station_id: station_id(from),
                end_station_id: to,
            })
            .with_context(|| format!("writing trip {n}"))?;
    }
    writer.flush().context("flushing trips")?;

    println!("Wrote {N_STATIONS} stations to {stations_path} and {N_TRIPS} trips to {trips_path}");
    Ok(())
}
