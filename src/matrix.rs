//! Editing of jagged 2D arrays: whole-column operations, single-cell moves, and padding a
//! jagged matrix out to a rectangular or square shape.
//!
//! Nothing here mutates its input. Every operation borrows the rows and hands back a fresh
//! [`Matrix`]. Indices are `isize`, and a negative index counts back from the end of the
//! row (or of the matrix, for row indices).

use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use crate::JaggedError;

/// A list of rows, each of which may have its own length.
pub type Matrix<T> = Vec<Vec<T>>;

/// What [`add_column`] puts into each row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnValue<T> {
    /// The same value in every row.
    Single(T),
    /// `values[i]` goes into row `i`.
    PerRow(Vec<T>),
}

impl<T> ColumnValue<T> {
    fn for_row(&self, row: usize) -> Option<&T> {
        match self {
            ColumnValue::Single(value) => Some(value),
            ColumnValue::PerRow(values) => values.get(row),
        }
    }
}

/// Position addressed by `index` in a sequence of `len` items, where a negative `index`
/// counts from the end. `None` if that lands before the start.
///
/// There is no upper bound check; callers decide whether `len` itself is addressable.
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    }
}

/// Insert a cell into every row at `index`.
///
/// `index` may equal the row length (append). For a negative `index` the cell goes in
/// before the element it addresses, so `-1` inserts before the last cell. An empty
/// matrix comes back empty.
pub fn add_column<T: Clone>(
    matrix: &[Vec<T>],
    index: isize,
    value: ColumnValue<T>,
) -> Result<Matrix<T>> {
    let magnitude = index.unsigned_abs();
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if magnitude > row.len() {
                return Err(JaggedError::ColumnOutOfRange { row: i }).with_context(|| {
                    anyhow!("adding column {index} to a row of {} cells", row.len())
                });
            }
            let cell = value
                .for_row(i)
                .ok_or(JaggedError::MissingColumnValue { row: i })?;
            let at = resolve_index(row.len(), index)
                .ok_or(JaggedError::ColumnOutOfRange { row: i })?;

            let mut row = row.clone();
            row.insert(at, cell.clone());
            Ok(row)
        })
        .collect()
}

/// Remove the cell at `index` from every row.
pub fn remove_column<T: Clone>(matrix: &[Vec<T>], index: isize) -> Result<Matrix<T>> {
    if matrix.is_empty() {
        return Err(JaggedError::EmptyMatrix).context("removing a column");
    }

    let magnitude = index.unsigned_abs();
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if magnitude >= row.len() {
                return Err(JaggedError::ColumnOutOfRange { row: i }).with_context(|| {
                    anyhow!("removing column {index} from a row of {} cells", row.len())
                });
            }
            let at = resolve_index(row.len(), index)
                .ok_or(JaggedError::ColumnOutOfRange { row: i })?;

            let mut row = row.clone();
            row.remove(at);
            Ok(row)
        })
        .collect()
}

/// Move the cell at column `index` to column `to`, in every row.
///
/// When `index == to` the input is returned as is, without looking at the rows. The
/// comparison is on the values given, so `-1` and `3` on four columns still take the
/// general path. Both indices are resolved against each row's own length; `to` addresses
/// the row after the cell has been taken out.
pub fn move_column<T: Clone>(matrix: &[Vec<T>], index: isize, to: isize) -> Result<Matrix<T>> {
    if matrix.is_empty() {
        return Err(JaggedError::EmptyMatrix).context("moving a column");
    }
    if index == to {
        return Ok(matrix.to_vec());
    }

    let (from_magnitude, to_magnitude) = (index.unsigned_abs(), to.unsigned_abs());
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let len = row.len();
            if from_magnitude >= len {
                return Err(JaggedError::ColumnOutOfRange { row: i })
                    .with_context(|| anyhow!("moving column {index} in a row of {len} cells"));
            }
            if to_magnitude >= len {
                return Err(JaggedError::ToColumnOutOfRange { row: i })
                    .with_context(|| anyhow!("moving to column {to} in a row of {len} cells"));
            }
            let from = resolve_index(len, index).ok_or(JaggedError::ColumnOutOfRange { row: i })?;
            let dest = resolve_index(len, to).ok_or(JaggedError::ToColumnOutOfRange { row: i })?;

            let mut row = row.clone();
            let cell = row.remove(from);
            row.insert(dest, cell);
            Ok(row)
        })
        .collect()
}

/// Move one cell from `(from_row, from_column)` to `(to_row, to_column)`.
///
/// The source must exist. The destination need not: missing rows are appended empty,
/// and a destination column past the end of its row pads the row with `fill` and writes
/// the cell over the last pad. A destination column within the row (or just past its
/// end) inserts, shifting the rest of the row right.
///
/// Negative destination indices are resolved against the matrix as it was passed in,
/// before the source cell is removed or anything grows. Growth that cannot be allocated
/// fails with [`JaggedError::Capacity`].
pub fn move_cell<T: Clone>(
    matrix: &[Vec<T>],
    from_row: isize,
    from_column: isize,
    to_row: isize,
    to_column: isize,
    fill: T,
) -> Result<Matrix<T>> {
    if matrix.is_empty() {
        return Err(JaggedError::EmptyMatrix).context("moving a cell");
    }

    let rows = matrix.len();
    if from_row.unsigned_abs() >= rows {
        return Err(JaggedError::SourceRowOutOfRange)
            .with_context(|| anyhow!("row {from_row} of a matrix with {rows} rows"));
    }
    let source = resolve_index(rows, from_row).ok_or(JaggedError::SourceRowOutOfRange)?;

    let source_len = matrix[source].len();
    if from_column.unsigned_abs() >= source_len {
        return Err(JaggedError::SourceColumnOutOfRange { row: source })
            .with_context(|| anyhow!("column {from_column} of a row with {source_len} cells"));
    }
    let column = resolve_index(source_len, from_column)
        .ok_or(JaggedError::SourceColumnOutOfRange { row: source })?;

    let target = resolve_index(rows, to_row)
        .ok_or(JaggedError::DestinationOutOfRange)
        .with_context(|| anyhow!("destination row {to_row} of a matrix with {rows} rows"))?;
    let target_len = matrix.get(target).map_or(0, Vec::len);
    let target_column = resolve_index(target_len, to_column)
        .ok_or(JaggedError::DestinationOutOfRange)
        .with_context(|| {
            anyhow!("destination column {to_column} of a row with {target_len} cells")
        })?;
    debug!("move_cell: ({source}, {column}) -> ({target}, {target_column})");

    let mut result = matrix.to_vec();
    let cell = result[source].remove(column);

    if target >= result.len() {
        debug!("move_cell: growing to {} rows", target + 1);
        result
            .try_reserve(target + 1 - result.len())
            .map_err(JaggedError::from)
            .with_context(|| anyhow!("growing to {} rows", target + 1))?;
        result.resize_with(target + 1, Vec::new);
    }

    let row = &mut result[target];
    if target_column > row.len() {
        debug!("move_cell: padding row {target} from {} cells", row.len());
        row.try_reserve(target_column + 1 - row.len())
            .map_err(JaggedError::from)
            .with_context(|| anyhow!("padding row {target} to {} cells", target_column + 1))?;
        row.resize(target_column + 1, fill);
        row[target_column] = cell;
    } else {
        row.insert(target_column, cell);
    }

    Ok(result)
}

/// Pad every row on the right with `fill` up to the length of the longest row.
///
/// An empty matrix stays empty.
pub fn to_rectangular<T: Clone>(matrix: &[Vec<T>], fill: T) -> Matrix<T> {
    let width = matrix.iter().map(Vec::len).max().unwrap_or(0);
    matrix
        .iter()
        .map(|row| {
            let mut row = row.clone();
            row.resize(width, fill.clone());
            row
        })
        .collect()
}

/// Make the matrix rectangular, then append rows of `fill` until there are as many rows
/// as columns.
///
/// Rows are only ever added: a matrix with more rows than columns comes back rectangular
/// but not square.
pub fn to_square<T: Clone>(matrix: &[Vec<T>], fill: T) -> Matrix<T> {
    if matrix.is_empty() {
        return Vec::new();
    }

    let mut square = to_rectangular(matrix, fill.clone());
    let columns = square.first().map_or(0, Vec::len);
    if columns > square.len() {
        debug!("to_square: adding {} rows", columns - square.len());
        square.resize(columns, vec![fill; columns]);
    }
    square
}

/// Every row has the same length.
pub fn is_rectangular<T>(matrix: &[Vec<T>]) -> bool {
    matrix.iter().map(Vec::len).all_equal()
}

/// Every row is as long as the matrix is tall.
pub fn is_square<T>(matrix: &[Vec<T>]) -> bool {
    matrix.iter().all(|row| row.len() == matrix.len())
}

/// Copy a rectangular matrix into an `ndarray` array, rows along axis 0.
pub fn to_array2<T: Clone>(matrix: &[Vec<T>]) -> Result<Array2<T>> {
    let columns = matrix.first().map_or(0, Vec::len);
    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != columns)
    {
        return Err(JaggedError::NotRectangular {
            row,
            expected: columns,
            found,
        })
        .context("only rectangular matrices fit in a 2d array");
    }

    let cells = matrix.iter().flatten().cloned().collect_vec();
    Array2::from_shape_vec((matrix.len(), columns), cells)
        .map_err(JaggedError::from)
        .context("2d array from rows")
}

pub fn from_array2<T: Clone>(array: &Array2<T>) -> Matrix<T> {
    array.outer_iter().map(|row| row.to_vec()).collect()
}
