//! Static PNG figures rendered with plotters' bitmap backend.
//!
//! One module per figure; this module holds the shared file naming,
//! styling constants and helpers.

pub mod means;
pub mod p_values;
pub mod pareto;

use std::path::PathBuf;

use crate::data::model::Model;

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_SIZE: u32 = 24;
pub const LABEL_FONT_SIZE: u32 = 16;
pub const ANNOTATION_FONT_SIZE: u32 = 14;
pub const FIGURE_MARGIN: u32 = 20;
pub const MARKER_SIZE: i32 = 5;

/// `YYYYMMDD-HHMMSS` in local time.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d-%H%M%S").to_string()
}

pub fn pareto_file_name(x_metric: &str, y_metric: &str, timestamp: &str) -> String {
    format!("pareto_front_all_values_{x_metric}_vs_{y_metric}_{timestamp}.png")
}

pub fn means_file_name(timestamp: &str) -> String {
    format!("mean_points_plot_{timestamp}.png")
}

pub fn p_values_file_name(timestamp: &str) -> String {
    format!("p_values_plot_{timestamp}.png")
}

/// Paths of the three figures written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigurePaths {
    pub pareto: PathBuf,
    pub means: PathBuf,
    pub p_values: PathBuf,
}

/// Marker drawn for a model's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Cross,
}

pub fn marker(model: Model) -> Marker {
    match model {
        Model::Svm => Marker::Circle,
        Model::NaiveBayes => Marker::Cross,
    }
}

/// Scientific notation with a signed two-digit exponent, e.g. `3.12e-02`.
pub fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.2e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Label for an x position on a categorical axis.
pub(crate) fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
