/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   remote CSV / local CSV
///        │
///        ▼
///   ┌──────────┐     ┌────────────┐
///   │  loader   │ ──▶ │ TableCache │  keyed by source
///   └──────────┘     └────────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ InventoryTable │  Vec<Product>, filter domains
///   └────────────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌───────────┐
///   │  filter   │          │ aggregate │  counts, histogram, metrics
///   └──────────┘          └───────────┘
///   selected row indices    (full table)
/// ```

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
