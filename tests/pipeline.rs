use std::fs;
use std::path::Path;

use cv_compare::config::{
    AnalysisConfig, Project, FOLD_METRICS, MEANS_FIGURE_SIZE, MEAN_METRICS, PARETO_FIGURE_SIZE,
    P_VALUES_FIGURE_SIZE,
};
use cv_compare::{app, run};

const SVM_LIST: &str = "[0.9, 0.92, 0.88, 0.91, 0.93]";
const NB_LIST: &str = "[0.7, 0.71, 0.69, 0.73, 0.72]";

fn write_table(dir: &Path, name: &str, means: [&str; 5], lists: [&str; 5]) {
    let mut writer = csv::Writer::from_path(dir.join(name)).unwrap();
    let header: Vec<&str> = MEAN_METRICS.iter().chain(FOLD_METRICS.iter()).copied().collect();
    writer.write_record(&header).unwrap();
    let row: Vec<&str> = means.iter().chain(lists.iter()).copied().collect();
    writer.write_record(&row).unwrap();
    writer.flush().unwrap();
}

fn config(dir: &Path) -> AnalysisConfig {
    AnalysisConfig {
        project: Project::Caffe,
        data_dir: dir.to_path_buf(),
        output_dir: dir.join("figures"),
        show_figures: false,
    }
}

fn png_size(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

#[test]
fn writes_three_figures_with_expected_names() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "caffe_SVM.csv",
        ["0.91", "0.88", "0.86", "0.87", "0.93"],
        [SVM_LIST; 5],
    );
    write_table(
        dir.path(),
        "caffe_NB.csv",
        ["0.77", "0.70", "0.72", "0.71", "0.80"],
        [NB_LIST; 5],
    );

    let figures = run(&config(dir.path())).unwrap();

    let name = |p: &Path| p.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name(&figures.paths.pareto)
        .starts_with("pareto_front_all_values_CV_list(f1)_vs_CV_list(AUC)_"));
    assert!(name(&figures.paths.means).starts_with("mean_points_plot_"));
    assert!(name(&figures.paths.p_values).starts_with("p_values_plot_"));

    assert_eq!(png_size(&figures.paths.pareto), PARETO_FIGURE_SIZE);
    assert_eq!(png_size(&figures.paths.means), MEANS_FIGURE_SIZE);
    assert_eq!(png_size(&figures.paths.p_values), P_VALUES_FIGURE_SIZE);

    let written = fs::read_dir(dir.path().join("figures")).unwrap().count();
    assert_eq!(written, 3);

    assert_eq!(figures.means.series[0].values[0], 0.91);
    assert_eq!(figures.means.series[1].values[0], 0.77);
    assert_eq!(figures.significance.tests.len(), 5);
    assert_eq!(figures.pareto.series[0].points.len(), 5);
}

#[test]
fn viewer_failure_after_run_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "caffe_SVM.csv",
        ["0.91", "0.88", "0.86", "0.87", "0.93"],
        [SVM_LIST; 5],
    );
    write_table(
        dir.path(),
        "caffe_NB.csv",
        ["0.77", "0.70", "0.72", "0.71", "0.80"],
        [NB_LIST; 5],
    );

    let figures = run(&config(dir.path())).unwrap();
    let paths = figures.paths.clone();
    let shown = app::present(figures, true, |_| {
        Err(anyhow::anyhow!("neither WAYLAND_DISPLAY nor DISPLAY is set"))
    });

    assert!(!shown);
    assert!(paths.pareto.exists());
    assert!(paths.means.exists());
    assert!(paths.p_values.exists());
}

#[test]
fn viewer_is_skipped_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let same = "[1.0, 1.0, 1.0, 1.0, 1.0]";
    write_table(dir.path(), "caffe_SVM.csv", ["1.0"; 5], [same; 5]);
    write_table(dir.path(), "caffe_NB.csv", ["1.0"; 5], [same; 5]);

    let figures = run(&config(dir.path())).unwrap();
    let mut called = false;
    let shown = app::present(figures, false, |_| {
        called = true;
        Ok(())
    });

    assert!(!shown);
    assert!(!called);
}

#[test]
fn identical_folds_yield_placeholder_bars() {
    let dir = tempfile::tempdir().unwrap();
    let same = "[1.0, 1.0, 1.0, 1.0, 1.0]";
    let means = ["1.0"; 5];
    write_table(dir.path(), "caffe_SVM.csv", means, [same; 5]);
    write_table(dir.path(), "caffe_NB.csv", means, [same; 5]);

    let figures = run(&config(dir.path())).unwrap();
    let report = &figures.significance;
    assert_eq!(report.tests.len(), 5);
    assert!(report.tests.iter().all(|t| t.identical));
    assert_eq!(report.display_p_values(), vec![1.0; 5]);
    assert!(figures.paths.p_values.exists());
}

#[test]
fn length_mismatch_only_affects_its_metric() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "caffe_SVM.csv",
        ["0.91", "0.88", "0.86", "0.87", "0.93"],
        [SVM_LIST; 5],
    );
    write_table(
        dir.path(),
        "caffe_NB.csv",
        ["0.77", "0.70", "0.72", "0.71", "0.80"],
        [NB_LIST, "[0.7, 0.71, 0.69, 0.73]", NB_LIST, NB_LIST, NB_LIST],
    );

    let figures = run(&config(dir.path())).unwrap();
    let tests = &figures.significance.tests;
    assert_eq!(tests[1].metric, "CV_list(prec)");
    assert_eq!(tests[1].p_value, None);
    assert_eq!(tests[1].display_p_value(), 1.0);
    for i in [0, 2, 3, 4] {
        assert!(tests[i].p_value.is_some());
    }
}

#[test]
fn malformed_pareto_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "caffe_SVM.csv",
        ["0.91", "0.88", "0.86", "0.87", "0.93"],
        [SVM_LIST, SVM_LIST, SVM_LIST, "[0.8, 0.82,", SVM_LIST],
    );
    write_table(
        dir.path(),
        "caffe_NB.csv",
        ["0.77", "0.70", "0.72", "0.71", "0.80"],
        [NB_LIST; 5],
    );

    let err = run(&config(dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("CV_list(f1)"));
    let written = fs::read_dir(dir.path().join("figures")).unwrap().count();
    assert_eq!(written, 0);
}

#[test]
fn missing_baseline_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "caffe_SVM.csv",
        ["0.91", "0.88", "0.86", "0.87", "0.93"],
        [SVM_LIST; 5],
    );
    let err = run(&config(dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("caffe_NB.csv"));
}
