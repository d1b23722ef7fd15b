//! Traffic core: time filtering, per-station aggregation and marker scaling.
//!
//! ```text
//!   &[Trip] ──► filter::filter_by_time(TimeFilter) ──► Vec<&Trip>
//!                                                        │
//!   &[Station] ─────────────────────► aggregate::aggregate
//!                                                        │
//!                                                        ▼
//!                          view_model::update ──► StationView { stations, scale }
//! ```
//!
//! Nothing here does I/O or keeps state between calls.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod scale;
pub mod time;
pub mod view_model;

pub use error::TrafficError;
pub use filter::TimeFilter;
pub use time::MinuteOfDay;
pub use view_model::{update, StationView};
