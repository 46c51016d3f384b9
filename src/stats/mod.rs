//! Statistical routines used by the significance stage.

pub mod normal;
pub mod wilcoxon;

pub use wilcoxon::{wilcoxon_signed_rank, PValueMethod, StatsError, WilcoxonResult};
