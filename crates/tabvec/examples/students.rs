//! Example: Vectorizing a Student Table
//!
//! Builds a small table with a categorical `school` column and a numeric
//! `gpa` column, one-hot encodes it, and reconstructs the original table
//! from the encoded matrix.

use ndarray::Array2;
use tabvec::frame::TableVectorizer;
use tabvec::primitives::{RowMap, Table, Value};

fn row(cells: &[(&str, Value)]) -> RowMap {
    cells.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Vectorizing a Student Table ===\n");

    let table = Table::new(
        vec!["school".to_string(), "gpa".to_string()],
        vec![
            row(&[("school", "a".into()), ("gpa", Value::Num(2.0))]),
            row(&[("school", "b".into()), ("gpa", Value::Num(3.0))]),
            row(&[("school", "c".into()), ("gpa", Value::Num(4.0))]),
        ],
    );

    let mut vectorizer = TableVectorizer::new();
    println!("Before fitting: {vectorizer}\n");

    let matrix = vectorizer.fit_transform(&table)?;
    println!("After fitting: {vectorizer}\n");
    println!("Encoded matrix ({} x {}):\n{matrix}\n", matrix.nrows(), matrix.ncols());

    let restored = vectorizer.inverse_transform(&matrix)?;
    println!("Restored rows:");
    for (i, r) in restored.rows().iter().enumerate() {
        println!("  row {i}: {r:?}");
    }

    // A row whose school indicators are all zero reconstructs with a
    // numeric-zero school cell instead of a missing one.
    let degenerate = Array2::from_shape_vec((1, 4), vec![3.5, 0.0, 0.0, 0.0])?;
    let filled = vectorizer.inverse_transform(&degenerate)?;
    println!("\nAll-zero indicators reconstruct as: {:?}", filled.rows()[0]);

    Ok(())
}
