//! Analysis stages over the two loaded result tables.
//!
//! ```text
//!   ProjectData ──► pareto        (F1/AUC fold pairs)
//!               ──► means         (scalar mean columns)
//!               ──► significance  (per-metric signed-rank tests)
//! ```
//!
//! Every stage only reads the tables; none depends on another's output.

pub mod means;
pub mod pareto;
pub mod significance;

pub use means::{MeanComparison, MeanSeries};
pub use pareto::{ParetoScatter, ParetoSeries};
pub use significance::{run_significance_tests, MetricTest, SignificanceReport};
