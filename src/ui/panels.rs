use eframe::egui::{self, Color32, Grid, RichText, ScrollArea, Ui};

use crate::chart::format_scientific;
use crate::config::SIGNIFICANCE_THRESHOLD;
use crate::state::{FigureTab, ViewerState};

// ---------------------------------------------------------------------------
// Left side panel – significance results
// ---------------------------------------------------------------------------

/// Render the per-metric test results.
pub fn side_panel(ui: &mut Ui, state: &ViewerState) {
    ui.heading(format!("Project: {}", state.figures.project));
    ui.separator();

    ui.strong("Wilcoxon signed-rank test");
    ui.label(format!("Threshold: {SIGNIFICANCE_THRESHOLD}"));
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            Grid::new("p_value_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Metric");
                    ui.strong("p-value");
                    ui.end_row();

                    for test in &state.figures.significance.tests {
                        ui.label(&test.metric);
                        let text = match test.p_value {
                            Some(p) if !p.is_nan() => format_scientific(p),
                            Some(_) => "NaN (shown as 1.0)".to_string(),
                            None => "n/a (shown as 1.0)".to_string(),
                        };
                        let mut rich = RichText::new(text);
                        if test.is_significant(SIGNIFICANCE_THRESHOLD) {
                            rich = rich.color(Color32::DARK_GREEN).strong();
                        }
                        let response = ui.label(rich);
                        if let Some(err) = &test.error {
                            response.on_hover_text(err);
                        }
                        ui.end_row();
                    }
                });

            let identical: Vec<&str> = state
                .figures
                .significance
                .tests
                .iter()
                .filter(|t| t.identical)
                .map(|t| t.metric.as_str())
                .collect();
            if !identical.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Identical data: {}", identical.join(", ")))
                        .color(Color32::from_rgb(200, 120, 0)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the figure tabs and the saved file location.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for tab in FigureTab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.title());
        }

        ui.separator();

        ui.label(
            RichText::new(format!("Saved: {}", state.saved_path().display())).color(Color32::GRAY),
        );
    });
}
