//! Error types for the tabular adapter.

use tabvec_traits::VectorizeError;

/// Errors that can occur when working with tables and data frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Vectorization error.
    #[error("vectorization error: {0}")]
    Vectorize(#[from] VectorizeError),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Column dtype not representable as a table cell.
    #[error("unsupported dtype {dtype} for column {column}")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// Offending dtype.
        dtype: String,
    },
}
