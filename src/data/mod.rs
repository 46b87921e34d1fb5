/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  ordered (name, Column) pairs, consistent row count
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  checks   │  read-only validation predicates (crate::checks)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
