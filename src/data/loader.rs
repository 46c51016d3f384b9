use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::{Model, ResultRow, ResultTable};
use crate::config::{AnalysisConfig, Project, FOLD_METRICS};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Both result tables of one project.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub project: Project,
    pub svm: ResultTable,
    pub baseline: ResultTable,
}

impl ProjectData {
    pub fn tables(&self) -> [&ResultTable; 2] {
        [&self.svm, &self.baseline]
    }
}

/// Path of the result file for `project` and `model` inside `dir`.
pub fn table_path(dir: &Path, project: Project, model: Model) -> PathBuf {
    dir.join(format!("{}_{}.csv", project.as_str(), model.file_suffix()))
}

/// Load `<project>_SVM.csv` and `<project>_NB.csv` from the configured
/// data directory. Either file missing or malformed is fatal.
pub fn load_project(config: &AnalysisConfig) -> Result<ProjectData> {
    let svm = load_table(&config.data_dir, config.project, Model::Svm)?;
    let baseline = load_table(&config.data_dir, config.project, Model::NaiveBayes)?;

    for table in [&svm, &baseline] {
        log_fold_columns(table);
    }

    Ok(ProjectData {
        project: config.project,
        svm,
        baseline,
    })
}

/// Load the result table of a single model.
pub fn load_table(dir: &Path, project: Project, model: Model) -> Result<ResultTable> {
    let path = table_path(dir, project, model);
    let table = load_csv(&path, model)
        .with_context(|| format!("loading {model} results from {}", path.display()))?;
    log::info!(
        "Loaded {} row(s) with {} column(s) from {}",
        table.len(),
        table.column_names.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one row per evaluation run.
/// Every cell is kept as text; scalar and list columns are decoded on access.
fn load_csv(path: &Path, model: Model) -> Result<ResultTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let cells: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();

        rows.push(ResultRow { cells });
    }

    Ok(ResultTable::new(model, headers, rows))
}

fn log_fold_columns(table: &ResultTable) {
    log::info!("{} DataFrame:", table.model);
    let Ok(row) = table.first_row() else {
        log::info!("  <no rows>");
        return;
    };
    for column in FOLD_METRICS {
        log::info!("  {column}: {}", row.get(column).unwrap_or("<missing>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "Accuracy,Precision,Recall,F1,AUC,CV_list(acc),CV_list(prec),CV_list(rec),CV_list(f1),CV_list(AUC)";

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn table_path_follows_naming_scheme() {
        let p = table_path(Path::new("data"), Project::IncubatorMxnet, Model::NaiveBayes);
        assert_eq!(p, Path::new("data").join("incubator-mxnet_NB.csv"));
    }

    #[test]
    fn loads_quoted_list_cells() {
        let dir = tempfile::tempdir().unwrap();
        let row = r#"0.9,0.8,0.7,0.75,0.85,"[0.9, 0.91]","[0.8, 0.81]","[0.7, 0.71]","[0.75, 0.76]","[0.85, 0.86]""#;
        write(dir.path(), "keras_SVM.csv", &format!("{HEADER}\n{row}\n"));

        let table = load_table(dir.path(), Project::Keras, Model::Svm).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.column_names.len(), 10);
        assert_eq!(table.scalar("F1").unwrap(), 0.75);
        assert_eq!(table.fold_values("CV_list(AUC)").unwrap(), vec![0.85, 0.86]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(dir.path(), Project::Caffe, Model::Svm).unwrap_err();
        assert!(format!("{err:#}").contains("caffe_SVM.csv"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "caffe_NB.csv", "a,b\n1,2\n3\n");
        assert!(load_table(dir.path(), Project::Caffe, Model::NaiveBayes).is_err());
    }

    #[test]
    fn load_project_reads_both_models() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "caffe_SVM.csv", "F1\n0.9\n");
        write(dir.path(), "caffe_NB.csv", "F1\n0.7\n");
        let config = AnalysisConfig {
            project: Project::Caffe,
            data_dir: dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
            show_figures: false,
        };

        let data = load_project(&config).unwrap();
        assert_eq!(data.svm.model, Model::Svm);
        assert_eq!(data.baseline.model, Model::NaiveBayes);
        assert_eq!(data.baseline.scalar("F1").unwrap(), 0.7);
    }
}
