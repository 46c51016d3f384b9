use std::collections::BTreeMap;
use std::fmt;

use super::literal::{self, LiteralError};

// ---------------------------------------------------------------------------
// Model – which classifier a result table belongs to
// ---------------------------------------------------------------------------

/// The two classifiers under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Model {
    Svm,
    NaiveBayes,
}

impl Model {
    /// Suffix of the result file: `<project>_<suffix>.csv`.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Model::Svm => "SVM",
            Model::NaiveBayes => "NB",
        }
    }

    /// Short label used in legends and console output.
    pub fn label(&self) -> &'static str {
        match self {
            Model::Svm => "SVM",
            Model::NaiveBayes => "NB",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{model} table has no data rows")]
    NoRows { model: Model },

    #[error("{model} table has no column '{column}'")]
    MissingColumn { model: Model, column: String },

    #[error("{model} column '{column}': '{value}' is not a number")]
    NotANumber {
        model: Model,
        column: String,
        value: String,
    },

    #[error("{model} column '{column}': {source}")]
    BadList {
        model: Model,
        column: String,
        #[source]
        source: LiteralError,
    },
}

// ---------------------------------------------------------------------------
// ResultRow – one row of a cross-validation result file
// ---------------------------------------------------------------------------

/// Raw cells of a single CSV row, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    pub cells: BTreeMap<String, String>,
}

impl ResultRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// ResultTable – one loaded result file
// ---------------------------------------------------------------------------

/// A loaded `<project>_<model>.csv`. Only the first row is ever analysed.
#[derive(Debug, Clone)]
pub struct ResultTable {
    pub model: Model,
    /// Header names in file order.
    pub column_names: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(model: Model, column_names: Vec<String>, rows: Vec<ResultRow>) -> Self {
        Self {
            model,
            column_names,
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row every stage reads.
    pub fn first_row(&self) -> Result<&ResultRow, DataError> {
        self.rows
            .first()
            .ok_or(DataError::NoRows { model: self.model })
    }

    /// Raw text of `column` in the first row.
    pub fn raw(&self, column: &str) -> Result<&str, DataError> {
        self.first_row()?
            .get(column)
            .ok_or_else(|| DataError::MissingColumn {
                model: self.model,
                column: column.to_string(),
            })
    }

    /// Scalar mean value of `column` in the first row.
    pub fn scalar(&self, column: &str) -> Result<f64, DataError> {
        let raw = self.raw(column)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| DataError::NotANumber {
                model: self.model,
                column: column.to_string(),
                value: raw.to_string(),
            })
    }

    /// Per-fold values of a list-encoded `column` in the first row.
    pub fn fold_values(&self, column: &str) -> Result<Vec<f64>, DataError> {
        let raw = self.raw(column)?;
        literal::parse_float_list(raw).map_err(|source| DataError::BadList {
            model: self.model,
            column: column.to_string(),
            source,
        })
    }
}
