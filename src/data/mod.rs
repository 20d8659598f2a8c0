/// Data layer: core types, loading, and chart aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/category index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  engine   │  (selector, range) → breakdown + scatter subset
///   └──────────┘
/// ```

pub mod engine;
pub mod loader;
pub mod model;
