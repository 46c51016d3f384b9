use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Project selection
// ---------------------------------------------------------------------------

/// Known cross-validation datasets. Each one names a pair of CSV files
/// `<project>_SVM.csv` / `<project>_NB.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    Pytorch,
    Tensorflow,
    Keras,
    IncubatorMxnet,
    Caffe,
}

impl Project {
    pub const ALL: [Project; 5] = [
        Project::Pytorch,
        Project::Tensorflow,
        Project::Keras,
        Project::IncubatorMxnet,
        Project::Caffe,
    ];

    /// File-name stem used by the result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Pytorch => "pytorch",
            Project::Tensorflow => "tensorflow",
            Project::Keras => "keras",
            Project::IncubatorMxnet => "incubator-mxnet",
            Project::Caffe => "caffe",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dataset analysed by the binary.
pub const PROJECT: Project = Project::Caffe;

// ---------------------------------------------------------------------------
// Metric taxonomy
// ---------------------------------------------------------------------------

/// Per-fold list columns, in test order.
pub const FOLD_METRICS: [&str; 5] = [
    "CV_list(acc)",
    "CV_list(prec)",
    "CV_list(rec)",
    "CV_list(f1)",
    "CV_list(AUC)",
];

/// Scalar mean columns, positionally paired with [`FOLD_METRICS`].
pub const MEAN_METRICS: [&str; 5] = ["Accuracy", "Precision", "Recall", "F1", "AUC"];

pub const PARETO_X_METRIC: &str = "CV_list(f1)";
pub const PARETO_Y_METRIC: &str = "CV_list(AUC)";

pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Bar height used when a p-value is absent or NaN.
pub const P_VALUE_PLACEHOLDER: f64 = 1.0;

// Figure sizes in pixels (8x6 and 10x6 inches at 100 dpi).
pub const PARETO_FIGURE_SIZE: (u32, u32) = (800, 600);
pub const MEANS_FIGURE_SIZE: (u32, u32) = (1000, 600);
pub const P_VALUES_FIGURE_SIZE: (u32, u32) = (1000, 600);

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything one analysis run needs to know about its surroundings.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub project: Project,
    /// Directory holding the two result CSVs.
    pub data_dir: PathBuf,
    /// Directory the PNG figures are written to.
    pub output_dir: PathBuf,
    /// Open the interactive figure window once the files are written.
    pub show_figures: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            project: PROJECT,
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            show_figures: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_names_match_result_file_stems() {
        let stems: Vec<&str> = Project::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            stems,
            ["pytorch", "tensorflow", "keras", "incubator-mxnet", "caffe"]
        );
        assert_eq!(Project::IncubatorMxnet.to_string(), "incubator-mxnet");
    }

    #[test]
    fn metric_lists_are_paired() {
        assert_eq!(FOLD_METRICS.len(), MEAN_METRICS.len());
        assert!(FOLD_METRICS.contains(&PARETO_X_METRIC));
        assert!(FOLD_METRICS.contains(&PARETO_Y_METRIC));
    }

    #[test]
    fn default_config_uses_project_constant() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.project, PROJECT);
        assert!(cfg.show_figures);
    }
}
