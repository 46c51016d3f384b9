use std::fs;

use anyhow::{Context, Result};

use crate::analysis::{run_significance_tests, MeanComparison, ParetoScatter, SignificanceReport};
use crate::chart::{self, FigurePaths};
use crate::config::{
    AnalysisConfig, Project, FOLD_METRICS, MEAN_METRICS, PARETO_X_METRIC, PARETO_Y_METRIC,
};
use crate::data::loader::load_project;

/// Everything a run produced: the figure data and where it was saved.
#[derive(Debug, Clone)]
pub struct FigureSet {
    pub project: Project,
    pub pareto: ParetoScatter,
    pub means: MeanComparison,
    pub significance: SignificanceReport,
    pub paths: FigurePaths,
}

/// Load both result tables, render the three figures and run the
/// significance tests. Loader, Pareto and mean-extraction failures end the
/// run; significance failures are isolated per metric.
pub fn run(config: &AnalysisConfig) -> Result<FigureSet> {
    let data = load_project(config)?;
    let project = data.project;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;

    let pareto = ParetoScatter::extract(&data, PARETO_X_METRIC, PARETO_Y_METRIC)
        .context("extracting Pareto scatter values")?;
    let pareto_path = config.output_dir.join(chart::pareto_file_name(
        PARETO_X_METRIC,
        PARETO_Y_METRIC,
        &chart::timestamp(),
    ));
    chart::pareto::render(&pareto_path, &pareto, project)
        .with_context(|| format!("rendering {}", pareto_path.display()))?;

    let means =
        MeanComparison::extract(&data, &MEAN_METRICS).context("extracting mean metric values")?;
    let means_path = config
        .output_dir
        .join(chart::means_file_name(&chart::timestamp()));
    chart::means::render(&means_path, &means, project)
        .with_context(|| format!("rendering {}", means_path.display()))?;

    let significance = run_significance_tests(&data, &FOLD_METRICS);
    println!("Results:");
    print!("{significance}");
    let p_values_path = config
        .output_dir
        .join(chart::p_values_file_name(&chart::timestamp()));
    chart::p_values::render(&p_values_path, &significance, project)
        .with_context(|| format!("rendering {}", p_values_path.display()))?;

    Ok(FigureSet {
        project,
        pareto,
        means,
        significance,
        paths: FigurePaths {
            pareto: pareto_path,
            means: means_path,
            p_values: p_values_path,
        },
    })
}
