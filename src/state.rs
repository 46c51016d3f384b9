use crate::pipeline::FigureSet;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Which figure the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureTab {
    #[default]
    Pareto,
    Means,
    PValues,
}

impl FigureTab {
    pub const ALL: [FigureTab; 3] = [FigureTab::Pareto, FigureTab::Means, FigureTab::PValues];

    pub fn title(&self) -> &'static str {
        match self {
            FigureTab::Pareto => "Pareto front",
            FigureTab::Means => "Mean values",
            FigureTab::PValues => "P-values",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct ViewerState {
    /// Figures produced by the run (read-only).
    pub figures: FigureSet,

    /// Currently selected figure.
    pub tab: FigureTab,
}

impl ViewerState {
    pub fn new(figures: FigureSet) -> Self {
        Self {
            figures,
            tab: FigureTab::default(),
        }
    }

    /// Path of the PNG the current tab was saved to.
    pub fn saved_path(&self) -> &std::path::Path {
        let paths = &self.figures.paths;
        match self.tab {
            FigureTab::Pareto => &paths.pareto,
            FigureTab::Means => &paths.means,
            FigureTab::PValues => &paths.p_values,
        }
    }

    /// Step to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        let idx = FigureTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
        self.tab = FigureTab::ALL[(idx + 1) % FigureTab::ALL.len()];
    }
}
