//! Table vectorization via a wrapped dictionary vectorizer.

use std::collections::HashMap;
use std::fmt;

use ndarray::Array2;
use tabvec_encode::DictEncoder;
use tabvec_primitives::{RowMap, Table, Value};
use tabvec_traits::{DictVectorize, VectorizeError};

/// Schema recorded at fit time.
#[derive(Debug, Clone)]
struct FittedSchema {
    /// Original column names, in table order.
    columns: Vec<String>,
    /// Derived one-hot feature name to (column, category).
    encoded: HashMap<String, (String, String)>,
}

/// Vectorizer for column-labeled tables. Categorical columns become one-hot
/// encoded.
///
/// Wraps a [`DictVectorize`] implementation and adapts it to tables: rows are
/// converted to row-mappings before delegation, and the inverse re-pivots
/// derived one-hot features back into single categorical columns, in the
/// column order recorded at fit time.
///
/// ```
/// use tabvec_frame::TableVectorizer;
/// use tabvec_primitives::{RowMap, Table, Value};
///
/// let rows: Vec<RowMap> = vec![
///     [("school".to_string(), Value::from("a")), ("gpa".to_string(), Value::Num(2.0))]
///         .into_iter()
///         .collect(),
///     [("school".to_string(), Value::from("b")), ("gpa".to_string(), Value::Num(3.0))]
///         .into_iter()
///         .collect(),
/// ];
/// let table = Table::new(vec!["school".to_string(), "gpa".to_string()], rows);
///
/// let mut vectorizer = TableVectorizer::new();
/// let matrix = vectorizer.fit_transform(&table)?;
/// assert_eq!(matrix.shape(), &[2, 3]);
///
/// let restored = vectorizer.inverse_transform(&matrix)?;
/// assert_eq!(restored, table);
/// # Ok::<(), tabvec_traits::VectorizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableVectorizer<V = DictEncoder> {
    inner: V,
    schema: Option<FittedSchema>,
}

impl TableVectorizer<DictEncoder> {
    /// Create an adapter around a default [`DictEncoder`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_vectorizer(DictEncoder::new())
    }
}

impl Default for TableVectorizer<DictEncoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: DictVectorize> TableVectorizer<V> {
    /// Create an adapter around a specific dictionary vectorizer.
    #[must_use]
    pub const fn with_vectorizer(vectorizer: V) -> Self {
        Self { inner: vectorizer, schema: None }
    }

    /// The wrapped dictionary vectorizer.
    #[must_use]
    pub const fn vectorizer(&self) -> &V {
        &self.inner
    }

    /// Returns whether the adapter has been fitted.
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        self.schema.is_some()
    }

    /// The column names recorded at fit time, or `None` before fitting.
    #[must_use]
    pub fn columns(&self) -> Option<&[String]> {
        self.schema.as_ref().map(|schema| schema.columns.as_slice())
    }

    /// Record the table's schema and fit the wrapped vectorizer on its rows.
    ///
    /// Returns the adapter itself, so fitting and transforming can be
    /// chained.
    ///
    /// # Errors
    /// Returns `VectorizeError` if the wrapped vectorizer fails to fit.
    pub fn fit(&mut self, table: &Table) -> Result<&mut Self, VectorizeError> {
        let records = table.to_records();
        self.fit_records(table.columns().to_vec(), &records)?;
        Ok(self)
    }

    /// Encode a table into a dense matrix using the fitted feature layout.
    ///
    /// The table's columns must be a subset of the columns recorded at fit
    /// time. Unseen categorical values are silently dropped by the wrapped
    /// vectorizer.
    ///
    /// # Errors
    /// Returns `VectorizeError::SchemaMismatch` if the table carries columns
    /// outside the fitted schema, or `VectorizeError::Unfitted` if called
    /// before [`fit`](Self::fit).
    pub fn transform(&self, table: &Table) -> Result<Array2<f64>, VectorizeError> {
        if let Some(schema) = &self.schema {
            if table.columns().iter().any(|c| !schema.columns.contains(c)) {
                return Err(VectorizeError::SchemaMismatch { expected: schema.columns.clone() });
            }
        }
        // Unfitted state surfaces from the wrapped vectorizer.
        self.inner.transform(&table.to_records())
    }

    /// Fit the table and encode it in one pass.
    ///
    /// The rows are converted to row-mappings once; fitting and transforming
    /// both operate on the same captured row-mappings, so the output is
    /// identical to [`fit`](Self::fit) followed by
    /// [`transform`](Self::transform).
    ///
    /// # Errors
    /// Returns `VectorizeError` if the wrapped vectorizer fails.
    pub fn fit_transform(&mut self, table: &Table) -> Result<Array2<f64>, VectorizeError> {
        let records = table.to_records();
        self.fit_records(table.columns().to_vec(), &records)?;
        self.inner.transform(&records)
    }

    /// Decode an encoded matrix back into a table.
    ///
    /// The wrapped vectorizer's inverse yields row-mappings keyed by derived
    /// feature name; derived one-hot features are re-pivoted into their
    /// original categorical columns, and rows are reassembled in fit-time
    /// column order. Cells absent from a reconstructed row (a categorical
    /// column whose indicators were all zero) are filled with numeric zero.
    ///
    /// # Errors
    /// Returns `VectorizeError::Unfitted` if called before
    /// [`fit`](Self::fit), or `VectorizeError::DimensionMismatch` if the
    /// matrix width differs from the fitted feature count.
    pub fn inverse_transform(&self, matrix: &Array2<f64>) -> Result<Table, VectorizeError> {
        let schema = self.schema.as_ref().ok_or(VectorizeError::Unfitted)?;
        let decoded = self.inner.inverse_transform(matrix.view())?;

        // A fresh mapping is built per row; derived one-hot keys are replaced
        // by (column -> category), plain numeric keys pass through.
        let records = decoded
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(name, value)| match schema.encoded.get(&name) {
                        Some((column, category)) => (column.clone(), Value::Str(category.clone())),
                        None => (name, value),
                    })
                    .collect::<RowMap>()
            })
            .collect();

        Ok(Table::from_records(schema.columns.clone(), records))
    }

    fn fit_records(
        &mut self,
        columns: Vec<String>,
        records: &[RowMap],
    ) -> Result<(), VectorizeError> {
        self.inner.fit(records)?;

        let separator = self.inner.separator().to_string();
        let names = self.inner.feature_names().ok_or(VectorizeError::Unfitted)?;

        // Derived names split at the first separator occurrence, so the
        // reverse mapping stays well defined for category values that
        // themselves contain the separator.
        let encoded = names
            .iter()
            .filter_map(|name| {
                name.split_once(separator.as_str()).map(|(column, category)| {
                    (name.clone(), (column.to_string(), category.to_string()))
                })
            })
            .collect();

        self.schema = Some(FittedSchema { columns, encoded });
        Ok(())
    }
}

impl<V: DictVectorize> fmt::Display for TableVectorizer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.feature_names() {
            Some(names) => write!(f, "TableVectorizer([{}])", names.join(", ")),
            None => write!(f, "TableVectorizer(<not fit>)"),
        }
    }
}
