//! Conversions between tables and polars data frames.

use polars::prelude::*;
use tabvec_primitives::{RowMap, Table, Value};

use crate::FrameError;

/// Convert a polars `DataFrame` into a [`Table`].
///
/// Numeric columns become [`Value::Num`] cells (cast to `f64`; numeric nulls
/// become NaN). String columns become [`Value::Str`] cells; string nulls are
/// omitted from the row-mapping, so they one-hot encode to all-zero
/// indicators and reconstruct as the numeric-zero default.
///
/// # Errors
/// Returns `FrameError::UnsupportedType` for any other column dtype.
pub fn from_dataframe(df: &DataFrame) -> Result<Table, FrameError> {
    let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let mut records = vec![RowMap::new(); df.height()];

    for name in &columns {
        let column = df.column(name.as_str())?;
        match column.dtype() {
            DataType::String => {
                let values = column.str()?;
                for (i, value) in values.into_iter().enumerate() {
                    if let Some(s) = value {
                        records[i].insert(name.clone(), Value::Str(s.to_string()));
                    }
                }
            }
            DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8 => {
                let cast = column.cast(&DataType::Float64)?;
                let values = cast.f64()?;
                for (i, value) in values.into_iter().enumerate() {
                    records[i].insert(name.clone(), Value::Num(value.unwrap_or(f64::NAN)));
                }
            }
            dtype => {
                return Err(FrameError::UnsupportedType {
                    column: name.clone(),
                    dtype: dtype.to_string(),
                });
            }
        }
    }

    Ok(Table::new(columns, records))
}

/// Convert a [`Table`] into a polars `DataFrame`.
///
/// A column whose cells are all numeric becomes `Float64`. A column carrying
/// any categorical cell becomes a string column, with numeric cells rendered
/// through their `Display` form (a zero-filled categorical cell renders as
/// `"0"`). Cells absent from a row become nulls.
///
/// # Errors
/// Returns `FrameError::Polars` if the frame cannot be assembled.
pub fn to_dataframe(table: &Table) -> Result<DataFrame, FrameError> {
    let mut columns = Vec::with_capacity(table.n_columns());

    for name in table.columns() {
        let cells: Vec<Option<&Value>> = table.rows().iter().map(|row| row.get(name)).collect();

        let categorical = cells.iter().any(|cell| matches!(cell, Some(Value::Str(_))));
        if categorical {
            let values: Vec<Option<String>> =
                cells.iter().map(|cell| cell.map(ToString::to_string)).collect();
            columns.push(Column::new(name.as_str().into(), values));
        } else {
            let values: Vec<Option<f64>> =
                cells.iter().map(|cell| cell.and_then(Value::as_num)).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }
    }

    Ok(DataFrame::new(columns)?)
}
