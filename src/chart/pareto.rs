use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use super::{
    marker, Marker, FIGURE_MARGIN, FONT_FAMILY, LABEL_FONT_SIZE, MARKER_SIZE, TITLE_FONT_SIZE,
};
use crate::analysis::ParetoScatter;
use crate::color::{model_color, to_plotters, MARKER_ALPHA};
use crate::config::{Project, PARETO_FIGURE_SIZE};

pub fn title(project: Project) -> String {
    format!("Pareto Front: F1 vs. AUC ({project})")
}

/// Render the per-fold F1/AUC scatter of both models to `path`.
pub fn render(path: &Path, scatter: &ParetoScatter, project: Project) -> Result<()> {
    let root = BitMapBackend::new(path, PARETO_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = scatter.bounds();
    let mut chart = ChartBuilder::on(&root)
        .margin(FIGURE_MARGIN)
        .caption(title(project), (FONT_FAMILY, TITLE_FONT_SIZE))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("F1")
        .y_desc("AUC")
        .axis_desc_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    for series in &scatter.series {
        let style = to_plotters(model_color(series.model)).mix(MARKER_ALPHA as f64);
        let points = series.points.iter().copied();
        match marker(series.model) {
            Marker::Circle => {
                chart
                    .draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, style.filled())))?
                    .label(series.model.label())
                    .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, style.filled()));
            }
            Marker::Cross => {
                chart
                    .draw_series(points.map(|p| Cross::new(p, MARKER_SIZE, style.stroke_width(2))))?
                    .label(series.model.label())
                    .legend(move |(x, y)| Cross::new((x, y), MARKER_SIZE, style.stroke_width(2)));
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
    log::info!("Pareto scatter saved: {}", path.display());
    Ok(())
}
