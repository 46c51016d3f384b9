//! Data layer: result tables, loading, and list-cell decoding.
//!
//! Architecture:
//! ```text
//!  <project>_SVM.csv   <project>_NB.csv
//!        │                   │
//!        ▼                   ▼
//!   ┌──────────┐
//!   │  loader   │  read CSV → ResultTable (cells kept as text)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ ResultTable  │  row 0: scalar means + list-encoded folds
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ literal   │  "[0.8, 0.82]" → Vec<f64>
//!   └──────────┘
//! ```

pub mod literal;
pub mod loader;
pub mod model;
