//! Dictionary vectorization trait definitions.

use ndarray::{Array2, ArrayView2};
use tabvec_primitives::RowMap;

/// Errors that can occur during vectorization.
#[derive(Debug, thiserror::Error)]
pub enum VectorizeError {
    /// Operation requires a fitted vectorizer.
    #[error("vectorizer has not been fitted")]
    Unfitted,

    /// Input columns fall outside the fitted schema.
    #[error("input columns are not a subset of the fitted columns: {expected:?}")]
    SchemaMismatch {
        /// The columns recorded at fit time.
        expected: Vec<String>,
    },

    /// Dimension mismatch in input data.
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
        /// Context description.
        context: String,
    },
}

impl VectorizeError {
    /// Returns whether this error indicates a missing fit.
    #[must_use]
    pub const fn is_unfitted(&self) -> bool {
        matches!(self, Self::Unfitted)
    }
}

/// Capability of a generic dictionary-based feature vectorizer.
///
/// Implementers learn a feature layout from a sequence of row-mappings:
/// numeric entries keep their key as a single feature, categorical entries
/// expand into one derived feature per observed value, named by joining the
/// key and the value with [`separator`](Self::separator).
pub trait DictVectorize {
    /// The separator joining a key and a categorical value into a derived
    /// feature name.
    fn separator(&self) -> &str;

    /// Learn the feature layout from a sequence of row-mappings.
    ///
    /// # Errors
    /// Returns `VectorizeError` if the layout cannot be derived.
    fn fit(&mut self, records: &[RowMap]) -> Result<(), VectorizeError>;

    /// Encode row-mappings into a dense matrix using the fitted layout.
    ///
    /// Keys deriving feature names unknown to the layout are ignored; absent
    /// keys contribute zero.
    ///
    /// # Errors
    /// Returns `VectorizeError::Unfitted` if called before [`fit`](Self::fit).
    fn transform(&self, records: &[RowMap]) -> Result<Array2<f64>, VectorizeError>;

    /// Decode a matrix back into row-mappings, omitting zero-valued entries.
    ///
    /// # Errors
    /// Returns `VectorizeError::Unfitted` if called before [`fit`](Self::fit),
    /// or `VectorizeError::DimensionMismatch` if the matrix width differs
    /// from the fitted feature count.
    fn inverse_transform(&self, matrix: ArrayView2<'_, f64>) -> Result<Vec<RowMap>, VectorizeError>;

    /// The ordered derived feature names, or `None` before fitting.
    fn feature_names(&self) -> Option<&[String]>;
}
