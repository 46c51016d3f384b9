use cv_compare::{app, run, AnalysisConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::default();
    log::info!("Comparing SVM and NB results for project {}", config.project);

    let figures = run(&config)?;
    app::present(figures, config.show_figures, app::show_figures);
    Ok(())
}
