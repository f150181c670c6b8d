/// Data layer: launch records, loading, and filtering.
///
/// Architecture:
/// ```text
///  URL / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse CSV → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, site / category index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload predicates → filtered rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
