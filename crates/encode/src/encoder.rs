//! Dictionary-based feature encoding.

use std::collections::{BTreeSet, HashMap};

use ndarray::{Array2, ArrayView2};
use tabvec_primitives::{RowMap, Value};
use tabvec_traits::{DictVectorize, VectorizeError};

/// Default separator joining a key and a categorical value into a derived
/// feature name.
pub const DEFAULT_SEPARATOR: &str = "=";

/// Feature layout learned at fit time.
#[derive(Debug, Clone)]
struct FeatureSpace {
    /// Derived feature names, sorted lexicographically.
    names: Vec<String>,
    /// Feature name to column index.
    index: HashMap<String, usize>,
}

impl FeatureSpace {
    fn new(names: Vec<String>) -> Self {
        let index = names.iter().enumerate().map(|(i, name)| (name.clone(), i)).collect();
        Self { names, index }
    }
}

/// Generic dictionary vectorizer over row-mappings.
///
/// Numeric entries keep their key as a single feature; categorical entries
/// expand into one derived feature per observed value, named by joining key
/// and value with the separator. Derived feature names are deduplicated and
/// sorted lexicographically at fit time, which fixes the column order of the
/// encoded matrix.
#[derive(Debug, Clone)]
pub struct DictEncoder {
    separator: String,
    space: Option<FeatureSpace>,
}

impl DictEncoder {
    /// Create a new encoder with the default `"="` separator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Create a new encoder with a custom separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self { separator: separator.into(), space: None }
    }

    /// Returns whether the encoder has been fitted.
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        self.space.is_some()
    }

    /// Derived feature name for a single entry.
    fn feature_name(&self, key: &str, value: &Value) -> String {
        match value {
            Value::Num(_) => key.to_string(),
            Value::Str(s) => format!("{key}{}{s}", self.separator),
        }
    }

    fn space(&self) -> Result<&FeatureSpace, VectorizeError> {
        self.space.as_ref().ok_or(VectorizeError::Unfitted)
    }
}

impl Default for DictEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictVectorize for DictEncoder {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn fit(&mut self, records: &[RowMap]) -> Result<(), VectorizeError> {
        let mut names = BTreeSet::new();
        for row in records {
            for (key, value) in row {
                names.insert(self.feature_name(key, value));
            }
        }
        self.space = Some(FeatureSpace::new(names.into_iter().collect()));
        Ok(())
    }

    fn transform(&self, records: &[RowMap]) -> Result<Array2<f64>, VectorizeError> {
        let space = self.space()?;

        let mut matrix = Array2::zeros((records.len(), space.names.len()));
        for (i, row) in records.iter().enumerate() {
            for (key, value) in row {
                // Entries deriving names unknown to the layout are dropped.
                if let Some(&j) = space.index.get(&self.feature_name(key, value)) {
                    matrix[[i, j]] = match value {
                        Value::Num(v) => *v,
                        Value::Str(_) => 1.0,
                    };
                }
            }
        }

        Ok(matrix)
    }

    fn inverse_transform(
        &self,
        matrix: ArrayView2<'_, f64>,
    ) -> Result<Vec<RowMap>, VectorizeError> {
        let space = self.space()?;

        if matrix.ncols() != space.names.len() {
            return Err(VectorizeError::DimensionMismatch {
                expected: space.names.len(),
                actual: matrix.ncols(),
                context: "matrix columns".to_string(),
            });
        }

        let records = matrix
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &v)| v != 0.0)
                    .map(|(j, &v)| (space.names[j].clone(), Value::Num(v)))
                    .collect()
            })
            .collect();

        Ok(records)
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.space.as_ref().map(|space| space.names.as_slice())
    }
}
