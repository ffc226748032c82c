//! Example: DataFrame Round-Trip
//!
//! Converts a polars DataFrame into a table, one-hot encodes it, and
//! reconstructs an equal DataFrame from the encoded matrix.

use polars::prelude::*;
use tabvec::frame::{TableVectorizer, from_dataframe, to_dataframe};
use tabvec::traits::DictVectorize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let df = df! {
        "school" => &["a", "b", "c"],
        "gpa" => &[2.0, 3.0, 4.0],
    }?;
    println!("Input frame:\n{df}\n");

    let table = from_dataframe(&df)?;

    let mut vectorizer = TableVectorizer::new();
    let matrix = vectorizer.fit_transform(&table)?;
    println!("Derived features: {:?}", vectorizer.vectorizer().feature_names().unwrap());
    println!("Encoded matrix:\n{matrix}\n");

    let restored = to_dataframe(&vectorizer.inverse_transform(&matrix)?)?;
    println!("Restored frame:\n{restored}\n");

    assert!(restored.equals(&df));
    println!("Round-trip preserved the frame");

    Ok(())
}
