use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use super::{
    category_label, marker, Marker, FIGURE_MARGIN, FONT_FAMILY, LABEL_FONT_SIZE, MARKER_SIZE,
    TITLE_FONT_SIZE,
};
use crate::analysis::pareto::padded_range;
use crate::analysis::MeanComparison;
use crate::color::{model_color, to_plotters};
use crate::config::{Project, MEANS_FIGURE_SIZE};

pub fn title(project: Project) -> String {
    format!("Mean Metric Values for SVM and NB ({project})")
}

pub fn legend_label(label: &str) -> String {
    format!("{label} Mean")
}

/// Render the categorical mean comparison to `path`. Category `i` sits at
/// x = `i`; each model contributes one point per category.
pub fn render(path: &Path, comparison: &MeanComparison, project: Project) -> Result<()> {
    let root = BitMapBackend::new(path, MEANS_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = comparison.metrics.len();
    let x_range = -0.5..n as f64 - 0.5;
    let y_range = padded_range(comparison.series.iter().flat_map(|s| s.values.iter().copied()));

    let mut chart = ChartBuilder::on(&root)
        .margin(FIGURE_MARGIN)
        .caption(title(project), (FONT_FAMILY, TITLE_FONT_SIZE))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let labels = &comparison.metrics;
    chart
        .configure_mesh()
        .x_labels(n)
        .x_desc("Metrics")
        .y_desc("Mean Value")
        .x_label_formatter(&|x| category_label(labels, *x))
        .axis_desc_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    for series in &comparison.series {
        let color = to_plotters(model_color(series.model));
        let label = legend_label(series.model.label());
        let points = comparison
            .points(series)
            .into_iter()
            .map(|(i, v)| (i as f64, v));
        match marker(series.model) {
            Marker::Circle => {
                chart
                    .draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, color.filled())))?
                    .label(label)
                    .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled()));
            }
            Marker::Cross => {
                chart
                    .draw_series(points.map(|p| Cross::new(p, MARKER_SIZE, color.stroke_width(2))))?
                    .label(label)
                    .legend(move |(x, y)| Cross::new((x, y), MARKER_SIZE, color.stroke_width(2)));
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    log::info!("Mean comparison saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MeanSeries;
    use crate::data::model::Model;

    #[test]
    fn renders_categorical_axis_to_png() {
        let comparison = MeanComparison {
            metrics: ["Accuracy", "Precision", "Recall", "F1", "AUC"]
                .map(String::from)
                .to_vec(),
            series: vec![
                MeanSeries {
                    model: Model::Svm,
                    values: vec![0.91, 0.84, 0.78, 0.80, 0.93],
                },
                MeanSeries {
                    model: Model::NaiveBayes,
                    values: vec![0.77, 0.62, 0.85, 0.70, 0.81],
                },
            ],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("means.png");

        render(&path, &comparison, Project::Caffe).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn legend_names_model_mean() {
        assert_eq!(legend_label("SVM"), "SVM Mean");
    }
}
