use anyhow::{bail, Result};

use crate::data::loader::ProjectData;
use crate::data::model::{Model, ResultTable};

/// Raw per-fold `(x, y)` metric pairs of one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoSeries {
    pub model: Model,
    pub points: Vec<(f64, f64)>,
}

/// Both models' fold pairs for the chosen x/y list columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoScatter {
    pub x_metric: String,
    pub y_metric: String,
    pub series: Vec<ParetoSeries>,
}

impl ParetoScatter {
    /// Decode `x_metric` and `y_metric` from row 0 of both tables.
    /// Any missing column, malformed list or length mismatch is fatal.
    pub fn extract(data: &ProjectData, x_metric: &str, y_metric: &str) -> Result<Self> {
        let series = data
            .tables()
            .into_iter()
            .map(|table| extract_series(table, x_metric, y_metric))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            x_metric: x_metric.to_string(),
            y_metric: y_metric.to_string(),
            series,
        })
    }

    /// Axis bounds covering every point, padded by 5% of the span.
    pub fn bounds(&self) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let xs = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
        let ys = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1));
        (padded_range(xs), padded_range(ys))
    }
}

fn extract_series(table: &ResultTable, x_metric: &str, y_metric: &str) -> Result<ParetoSeries> {
    let xs = table.fold_values(x_metric)?;
    let ys = table.fold_values(y_metric)?;
    if xs.len() != ys.len() {
        bail!(
            "{}: '{x_metric}' has {} values but '{y_metric}' has {}",
            table.model,
            xs.len(),
            ys.len()
        );
    }
    Ok(ParetoSeries {
        model: table.model,
        points: xs.into_iter().zip(ys).collect(),
    })
}

/// Range spanning `values` with 5% padding on each side. Degenerate or
/// empty inputs get a fixed half-width so the chart still has an extent.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        0.05
    } else {
        span * 0.05
    };
    (min - pad)..(max + pad)
}
