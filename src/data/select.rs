use ndarray::{Array1, Array2, ArrayView1};

use super::Table;
use crate::error::Result;

/// Projects `features` (in the given order) into an `n x k` matrix and `target` into a vector.
///
/// Every name is looked up before any column is read, so a missing column is
/// reported even when another selected column holds bad cells.
///
/// # Errors
/// * `TrainErr::Schema` - One of the names isn't a column of `table`.
/// * `TrainErr::DataLoad` - All names exist but a selected column holds a non-numeric cell.
pub fn select_xy<S: AsRef<str>>(
    table: &Table,
    features: &[S],
    target: &str,
) -> Result<(Array2<f64>, Array1<f64>)> {
    for name in features.iter().map(|name| name.as_ref()).chain([target]) {
        table.index_of(name)?;
    }

    let columns = features
        .iter()
        .map(|name| table.column(name.as_ref()))
        .collect::<Result<Vec<ArrayView1<f64>>>>()?;
    let y = table.column(target)?.to_owned();

    let x = Array2::from_shape_fn((table.len(), columns.len()), |(i, j)| columns[j][i]);
    Ok((x, y))
}
