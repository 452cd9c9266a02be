/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/booster indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selector + payload range → counts / points
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
