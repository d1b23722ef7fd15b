/// Data layer: record types and loading.
///
/// Architecture:
/// ```text
///  stations .json      trips .csv
///        │                 │
///        ▼                 ▼
///   ┌──────────────────────────┐
///   │          loader          │  parse files → Dataset
///   └──────────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Station>, Vec<Trip>
///   └──────────┘
///        │
///        ▼
///   crate::traffic  filter by time → aggregate → StationView
/// ```

pub mod loader;
pub mod model;
