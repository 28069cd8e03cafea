/// Data layer: core types, loading, and errors.
///
/// Architecture:
/// ```text
///  x,y,probability listing
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  split lines → Sample
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Grid   │  y-token → RowGroup of (x, probability)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  render  │  rows by y, cells by x → text
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
