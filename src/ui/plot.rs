use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, HLine, Legend, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints,
    Points, Text,
};

use crate::chart::{
    self, category_label, format_scientific, marker, p_values::ANNOTATION_OFFSET,
    p_values::BAR_WIDTH, Marker,
};
use crate::color::{bar_color, model_color, threshold_color, to_egui, to_egui_alpha, MARKER_ALPHA};
use crate::config::SIGNIFICANCE_THRESHOLD;
use crate::data::model::Model;
use crate::state::{FigureTab, ViewerState};

// ---------------------------------------------------------------------------
// Figure plots (central panel)
// ---------------------------------------------------------------------------

/// Render the figure of the selected tab.
pub fn figure(ui: &mut Ui, state: &ViewerState) {
    match state.tab {
        FigureTab::Pareto => pareto_plot(ui, state),
        FigureTab::Means => means_plot(ui, state),
        FigureTab::PValues => p_value_plot(ui, state),
    }
}

fn marker_shape(model: Model) -> MarkerShape {
    match marker(model) {
        Marker::Circle => MarkerShape::Circle,
        Marker::Cross => MarkerShape::Cross,
    }
}

fn pareto_plot(ui: &mut Ui, state: &ViewerState) {
    let figures = &state.figures;
    ui.heading(chart::pareto::title(figures.project));

    Plot::new("pareto_plot")
        .legend(Legend::default())
        .x_axis_label("F1")
        .y_axis_label("AUC")
        .show(ui, |plot_ui| {
            for series in &figures.pareto.series {
                let data: Vec<[f64; 2]> = series.points.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.points(
                    Points::new(PlotPoints::from(data))
                        .name(series.model.label())
                        .color(to_egui_alpha(model_color(series.model), MARKER_ALPHA))
                        .shape(marker_shape(series.model))
                        .filled(true)
                        .radius(chart::MARKER_SIZE as f32),
                );
            }
        });
}

fn means_plot(ui: &mut Ui, state: &ViewerState) {
    let figures = &state.figures;
    let labels = figures.means.metrics.clone();
    ui.heading(chart::means::title(figures.project));

    Plot::new("means_plot")
        .legend(Legend::default())
        .x_axis_label("Metrics")
        .y_axis_label("Mean Value")
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for series in &figures.means.series {
                let data: Vec<[f64; 2]> = figures
                    .means
                    .points(series)
                    .into_iter()
                    .map(|(i, v)| [i as f64, v])
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::from(data))
                        .name(chart::means::legend_label(series.model.label()))
                        .color(to_egui(model_color(series.model)))
                        .shape(marker_shape(series.model))
                        .filled(true)
                        .radius(chart::MARKER_SIZE as f32),
                );
            }
        });
}

fn p_value_plot(ui: &mut Ui, state: &ViewerState) {
    let figures = &state.figures;
    let report = &figures.significance;
    let labels: Vec<String> = report.metrics().into_iter().map(String::from).collect();
    ui.heading(chart::p_values::title(figures.project));

    let bars: Vec<Bar> = report
        .display_p_values()
        .into_iter()
        .enumerate()
        .map(|(i, p)| Bar::new(i as f64, p).width(BAR_WIDTH).name(&labels[i]))
        .collect();
    let heights = report.display_p_values();

    Plot::new("p_value_plot")
        .legend(Legend::default())
        .y_axis_label("P-value")
        .include_y(0.0)
        .include_y(1.1)
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Wilcoxon p-value")
                    .color(to_egui(bar_color())),
            );
            plot_ui.hline(
                HLine::new(SIGNIFICANCE_THRESHOLD)
                    .name(chart::p_values::threshold_label())
                    .color(to_egui(threshold_color()))
                    .style(LineStyle::dashed_loose()),
            );
            for (i, h) in heights.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, h + ANNOTATION_OFFSET),
                        RichText::new(format_scientific(*h)),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}
