use anyhow::Result;

use crate::data::loader::ProjectData;
use crate::data::model::{Model, ResultTable};

/// Scalar mean values of one model, in metric order.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanSeries {
    pub model: Model,
    pub values: Vec<f64>,
}

/// Mean metric values of both models for a categorical point chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanComparison {
    pub metrics: Vec<String>,
    pub series: Vec<MeanSeries>,
}

impl MeanComparison {
    /// Look up every mean column in row 0 of both tables. No defaulting:
    /// a missing or non-numeric column is fatal.
    pub fn extract(data: &ProjectData, metrics: &[&str]) -> Result<Self> {
        let series = data
            .tables()
            .into_iter()
            .map(|table| extract_series(table, metrics))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            series,
        })
    }

    /// `(category index, value)` points of one series.
    pub fn points(&self, series: &MeanSeries) -> Vec<(usize, f64)> {
        series.values.iter().copied().enumerate().collect()
    }
}

fn extract_series(table: &ResultTable, metrics: &[&str]) -> Result<MeanSeries> {
    let values = metrics
        .iter()
        .map(|m| table.scalar(m))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MeanSeries {
        model: table.model,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Project, MEAN_METRICS};
    use crate::data::model::ResultRow;

    fn table(model: Model, values: [&str; 5]) -> ResultTable {
        let row = ResultRow {
            cells: MEAN_METRICS
                .iter()
                .zip(values)
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        ResultTable::new(model, MEAN_METRICS.map(String::from).to_vec(), vec![row])
    }

    #[test]
    fn two_points_per_category_at_literal_values() {
        let data = ProjectData {
            project: Project::Caffe,
            svm: table(Model::Svm, ["0.91", "0.88", "0.86", "0.87", "0.93"]),
            baseline: table(Model::NaiveBayes, ["0.77", "0.70", "0.72", "0.71", "0.80"]),
        };
        let cmp = MeanComparison::extract(&data, &MEAN_METRICS).unwrap();

        assert_eq!(cmp.metrics, MEAN_METRICS.map(String::from).to_vec());
        assert_eq!(cmp.series.len(), 2);
        for category in 0..MEAN_METRICS.len() {
            let at_category = cmp
                .series
                .iter()
                .flat_map(|s| cmp.points(s))
                .filter(|(i, _)| *i == category)
                .count();
            assert_eq!(at_category, 2);
        }
        assert_eq!(cmp.series[0].values[0], 0.91);
        assert_eq!(cmp.series[1].values[0], 0.77);
        assert_eq!(cmp.series[1].model, Model::NaiveBayes);
    }

    #[test]
    fn missing_mean_column_is_fatal() {
        let mut nb = table(Model::NaiveBayes, ["0.77", "0.70", "0.72", "0.71", "0.80"]);
        nb.rows[0].cells.remove("Recall");
        let data = ProjectData {
            project: Project::Caffe,
            svm: table(Model::Svm, ["0.91", "0.88", "0.86", "0.87", "0.93"]),
            baseline: nb,
        };
        let err = MeanComparison::extract(&data, &MEAN_METRICS).unwrap_err();
        assert!(err.to_string().contains("Recall"));
    }
}
