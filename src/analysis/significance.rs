use std::fmt;

use crate::config::P_VALUE_PLACEHOLDER;
use crate::data::loader::ProjectData;
use crate::data::model::DataError;
use crate::stats::{wilcoxon_signed_rank, StatsError, WilcoxonResult};

// ---------------------------------------------------------------------------
// Per-metric outcome
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Result of testing one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTest {
    pub metric: String,
    /// `None` when decoding or the test itself failed.
    pub p_value: Option<f64>,
    /// Both fold sequences were element-wise equal.
    pub identical: bool,
    /// Failure message for an absent p-value.
    pub error: Option<String>,
}

impl MetricTest {
    /// Bar height for the chart: absent and NaN p-values become
    /// [`P_VALUE_PLACEHOLDER`], so a failed test reads as "not significant".
    pub fn display_p_value(&self) -> f64 {
        match self.p_value {
            Some(p) if !p.is_nan() => p,
            _ => P_VALUE_PLACEHOLDER,
        }
    }

    pub fn is_significant(&self, threshold: f64) -> bool {
        self.display_p_value() < threshold
    }
}

/// All per-metric outcomes in the order the metrics were given.
#[derive(Debug, Clone, PartialEq)]
pub struct SignificanceReport {
    pub tests: Vec<MetricTest>,
}

impl SignificanceReport {
    pub fn display_p_values(&self) -> Vec<f64> {
        self.tests.iter().map(MetricTest::display_p_value).collect()
    }

    pub fn metrics(&self) -> Vec<&str> {
        self.tests.iter().map(|t| t.metric.as_str()).collect()
    }
}

impl fmt::Display for SignificanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .tests
            .iter()
            .map(|t| t.metric.len())
            .max()
            .unwrap_or(0)
            .max("Metric".len());
        writeln!(f, "{:<width$}  Wilcoxon p-value", "Metric")?;
        for t in &self.tests {
            writeln!(f, "{:<width$}  {}", t.metric, t.display_p_value())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Test loop
// ---------------------------------------------------------------------------

/// Run the signed-rank test for every metric. A failure is confined to its
/// own metric and recorded as an absent p-value.
pub fn run_significance_tests(data: &ProjectData, metrics: &[&str]) -> SignificanceReport {
    let tests = metrics
        .iter()
        .map(|&metric| match test_metric(data, metric) {
            Ok((result, identical)) => MetricTest {
                metric: metric.to_string(),
                p_value: Some(result.p_value),
                identical,
                error: None,
            },
            Err((e, identical)) => {
                log::error!("Error processing metric {metric}: {e}");
                MetricTest {
                    metric: metric.to_string(),
                    p_value: None,
                    identical,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    SignificanceReport { tests }
}

fn test_metric(
    data: &ProjectData,
    metric: &str,
) -> Result<(WilcoxonResult, bool), (MetricError, bool)> {
    let svm = data.svm.fold_values(metric).map_err(|e| (MetricError::from(e), false))?;
    let baseline = data
        .baseline
        .fold_values(metric)
        .map_err(|e| (MetricError::from(e), false))?;

    log::info!("Metric: {metric}");
    log::info!("SVM values: {svm:?}");
    log::info!("Baseline values: {baseline:?}");

    let identical = svm == baseline;
    if identical {
        log::warn!("Identical data for metric {metric}");
    }

    wilcoxon_signed_rank(&svm, &baseline)
        .map(|r| (r, identical))
        .map_err(|e| (MetricError::from(e), identical))
}
