//! Data layer: numeric matrix type, loading, and column selection.
//!
//! Architecture:
//! ```text
//!   whitespace-delimited text
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → NumericMatrix
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ NumericMatrix  │  rows of f64, row index, column series
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  hidden columns → visible column indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod scale;
