use eframe::egui;

use crate::pipeline::FigureSet;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FigureViewerApp {
    pub state: ViewerState,
}

impl FigureViewerApp {
    pub fn new(figures: FigureSet) -> Self {
        Self {
            state: ViewerState::new(figures),
        }
    }
}

impl eframe::App for FigureViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.state.next_tab();
        }

        // ---- Top panel: figure tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: test results ----
        egui::SidePanel::left("results_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: selected figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure(ui, &self.state);
        });
    }
}

/// Open the figure window and block until it is closed.
pub fn show_figures(figures: FigureSet) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = format!("CV comparison – {}", figures.project);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureViewerApp::new(figures)))),
    )
    .map_err(|e| anyhow::anyhow!("figure window failed: {e}"))
}

/// Hand the saved figures to `open` when `show` is set. The PNGs are already
/// written, so a viewer failure (e.g. no display) is logged and not returned.
/// Returns whether the viewer ran to completion.
pub fn present<F>(figures: FigureSet, show: bool, open: F) -> bool
where
    F: FnOnce(FigureSet) -> anyhow::Result<()>,
{
    if !show {
        return false;
    }
    match open(figures) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not open figure window: {e:#}");
            false
        }
    }
}
