/// Data layer: core types, loading, and the artifact catalogue.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet        .png
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  loader   │  → Table     │  raster   │  → RasterImage
///   └──────────┘              └──────────┘
///        │                          │
///        ▼                          ▼
///   ┌──────────────────────────────────────┐
///   │ catalog   PreviewSpec → TablePreview  │  row caps, headers, widths
///   └──────────────────────────────────────┘
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
pub mod raster;
