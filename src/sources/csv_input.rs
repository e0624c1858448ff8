//! CSV input with named `x` and `y` columns.
//!
//! Extra columns are ignored; rows missing either field, or holding a
//! value that does not parse as `f64`, fail the whole read.

use std::io::Read;

use serde::Deserialize;

use crate::sources::errors::SourceError;


#[derive(Debug, Deserialize)]
struct Row {
    x: f64,
    y: f64,
}


/// Reads every `(x, y)` row from `reader`.
///
/// # Errors
/// - [`SourceError::Csv`] on missing columns or unparsable values
/// - [`SourceError::EmptyInput`] if there are no data rows
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<(f64, f64)>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for row in rdr.deserialize::<Row>() {
        let row = row?;
        points.push((row.x, row.y));
    }

    if points.is_empty() {
        return Err(SourceError::EmptyInput);
    }
    tracing::debug!(n = points.len(), "read csv points");
    Ok(points)
}
