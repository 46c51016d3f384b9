use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{
    category_label, format_scientific, ANNOTATION_FONT_SIZE, FIGURE_MARGIN, FONT_FAMILY,
    LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::analysis::SignificanceReport;
use crate::color::{bar_color, outline, threshold_color, to_plotters};
use crate::config::{Project, P_VALUES_FIGURE_SIZE, SIGNIFICANCE_THRESHOLD};

pub const BAR_WIDTH: f64 = 0.4;
/// Gap between a bar top and its annotation, in data units.
pub const ANNOTATION_OFFSET: f64 = 0.02;

pub fn title(project: Project) -> String {
    format!("P-values for Wilcoxon Test for the project {project}")
}

pub fn threshold_label() -> String {
    format!("Significance Threshold ({SIGNIFICANCE_THRESHOLD})")
}

/// `(left, right, height)` of every bar, placeholder-substituted.
pub fn bar_geometry(report: &SignificanceReport) -> Vec<(f64, f64, f64)> {
    report
        .display_p_values()
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let centre = i as f64;
            (centre - BAR_WIDTH / 2.0, centre + BAR_WIDTH / 2.0, p)
        })
        .collect()
}

/// Render the annotated p-value bar chart with the threshold line.
pub fn render(path: &Path, report: &SignificanceReport, project: Project) -> Result<()> {
    let root = BitMapBackend::new(path, P_VALUES_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = report.metrics().into_iter().map(String::from).collect();
    let n = labels.len();
    let bars = bar_geometry(report);
    let top = bars
        .iter()
        .map(|b| b.2)
        .fold(SIGNIFICANCE_THRESHOLD, f64::max)
        + 0.15;
    let x_max = n.max(1) as f64 - 0.5;

    let mut chart = ChartBuilder::on(&root)
        .margin(FIGURE_MARGIN)
        .caption(title(project), (FONT_FAMILY, TITLE_FONT_SIZE))
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..x_max, 0.0..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .y_desc("P-value")
        .x_label_formatter(&|x| category_label(&labels, *x))
        .x_label_style(
            TextStyle::from((FONT_FAMILY, LABEL_FONT_SIZE)).transform(FontTransform::Rotate270),
        )
        .axis_desc_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    let fill = to_plotters(bar_color());
    let edge = to_plotters(outline(bar_color(), 0.3));
    chart
        .draw_series(
            bars.iter()
                .map(|&(l, r, h)| Rectangle::new([(l, 0.0), (r, h)], fill.filled())),
        )?
        .label("Wilcoxon p-value")
        .legend(move |(x, y)| Rectangle::new([(x - 5, y - 5), (x + 5, y + 5)], fill.filled()));
    chart.draw_series(
        bars.iter()
            .map(|&(l, r, h)| Rectangle::new([(l, 0.0), (r, h)], edge.stroke_width(1))),
    )?;

    let annotation = TextStyle::from((FONT_FAMILY, ANNOTATION_FONT_SIZE))
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bars.iter().map(|&(l, r, h)| {
        Text::new(
            format_scientific(h),
            ((l + r) / 2.0, h + ANNOTATION_OFFSET),
            annotation.clone(),
        )
    }))?;

    let red = to_plotters(threshold_color());
    chart
        .draw_series(
            dashes(-0.5, x_max, 0.04, 0.025).map(|(a, b)| {
                PathElement::new(
                    vec![(a, SIGNIFICANCE_THRESHOLD), (b, SIGNIFICANCE_THRESHOLD)],
                    red.stroke_width(2),
                )
            }),
        )?
        .label(threshold_label())
        .legend(move |(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], red.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    log::info!("P-value chart saved: {}", path.display());
    Ok(())
}

/// Dash segments `(start, end)` covering `from..to`.
fn dashes(from: f64, to: f64, dash: f64, gap: f64) -> impl Iterator<Item = (f64, f64)> {
    let step = dash + gap;
    let count = ((to - from) / step).ceil().max(0.0) as usize;
    (0..count).map(move |i| {
        let start = from + i as f64 * step;
        (start, (start + dash).min(to))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MetricTest;

    fn test(metric: &str, p: Option<f64>) -> MetricTest {
        MetricTest {
            metric: metric.into(),
            p_value: p,
            identical: false,
            error: None,
        }
    }

    #[test]
    fn bars_use_placeholder_heights() {
        let report = SignificanceReport {
            tests: vec![
                test("a", Some(0.01)),
                test("b", None),
                test("c", Some(f64::NAN)),
            ],
        };
        let bars = bar_geometry(&report);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], (-0.2, 0.2, 0.01));
        assert_eq!(bars[1].2, 1.0);
        assert_eq!(bars[2].2, 1.0);
        assert!((bars[2].0 - 1.8).abs() < 1e-12);
    }

    #[test]
    fn dashes_cover_the_span() {
        let segs: Vec<_> = dashes(0.0, 1.0, 0.2, 0.05).collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], (0.0, 0.2));
        assert!(segs.iter().all(|(a, b)| a < b && *b <= 1.0));
    }

    #[test]
    fn renders_categorical_axis_to_png() {
        let report = SignificanceReport {
            tests: vec![
                test("CV_list(acc)", Some(0.0019)),
                test("CV_list(prec)", None),
                test("CV_list(rec)", Some(0.43)),
            ],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p_values.png");

        render(&path, &report, Project::Caffe).unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn labels_match_figure_text() {
        assert_eq!(threshold_label(), "Significance Threshold (0.05)");
        assert_eq!(
            title(Project::Keras),
            "P-values for Wilcoxon Test for the project keras"
        );
    }
}
