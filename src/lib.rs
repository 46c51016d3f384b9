pub mod analysis;
pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod state;
pub mod stats;
pub mod ui;

pub use config::{AnalysisConfig, Project};
pub use pipeline::{run, FigureSet};
