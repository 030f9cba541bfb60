use jagged::ColumnValue::{PerRow, Single};
use jagged::{add_column, move_cell, move_column, remove_column, JaggedError, Matrix};

fn wide() -> Matrix<i64> {
    vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]]
}

fn root(err: &anyhow::Error) -> &JaggedError {
    JaggedError::extract(err).expect("a matrix error at the root")
}

#[test]
fn add_column_names_the_row() {
    let m = vec![vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9, 10, 11]];
    let err = add_column(&m, 4, Single(10)).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 1 }));
    assert_eq!("index out of range for row 1", root(&err).to_string());

    let err = add_column(&m, -5, Single(10)).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 0 }));
}

#[test]
fn add_column_out_of_range() {
    let err = add_column(&wide(), 5, Single(10)).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 0 }));
}

#[test]
fn add_column_runs_out_of_values() {
    let err = add_column(&wide(), 0, PerRow(vec![1, 2])).unwrap_err();
    assert!(matches!(root(&err), JaggedError::MissingColumnValue { row: 2 }));
}

#[test]
fn add_column_checks_range_before_values() {
    let m = vec![vec![1, 2], vec![3]];
    let err = add_column(&m, 2, PerRow(vec![0])).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 1 }));
}

#[test]
fn remove_column_needs_rows() {
    let empty: Matrix<i64> = vec![];
    let err = remove_column(&empty, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::EmptyMatrix));
}

#[test]
fn remove_column_out_of_range() {
    let err = remove_column(&[vec![1, 2, 3], vec![4, 5, 6]], 3).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 0 }));

    // -3 would resolve to column 0, but is still out of range
    let err = remove_column(&[vec![1, 2, 3], vec![4, 5, 6]], -3).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 0 }));

    let err = remove_column(&[vec![1, 2, 3], vec![4]], 1).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 1 }));
}

#[test]
fn move_column_needs_rows() {
    let empty: Matrix<i64> = vec![];
    let err = move_column(&empty, 0, 1).unwrap_err();
    assert!(matches!(root(&err), JaggedError::EmptyMatrix));

    // before the identity short-circuit
    let err = move_column(&empty, 1, 1).unwrap_err();
    assert!(matches!(root(&err), JaggedError::EmptyMatrix));
}

#[test]
fn move_column_from_out_of_range() {
    for index in [4, -4] {
        let err = move_column(&wide(), index, 1).unwrap_err();
        assert!(matches!(root(&err), JaggedError::ColumnOutOfRange { row: 0 }));
    }
}

#[test]
fn move_column_to_out_of_range() {
    for to in [4, -4] {
        let err = move_column(&wide(), 1, to).unwrap_err();
        assert!(matches!(root(&err), JaggedError::ToColumnOutOfRange { row: 0 }));
        assert_eq!("to index out of range for row 0", root(&err).to_string());
    }
}

#[test]
fn move_column_fails_at_the_first_short_row() {
    let m = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10]];
    let err = move_column(&m, 0, 3).unwrap_err();
    assert!(matches!(root(&err), JaggedError::ToColumnOutOfRange { row: 2 }));
}

#[test]
fn move_cell_needs_rows() {
    let empty: Matrix<i64> = vec![];
    let err = move_cell(&empty, 0, 0, 0, 0, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::EmptyMatrix));
}

#[test]
fn move_cell_source_out_of_range() {
    let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
    for row in [2, -3] {
        let err = move_cell(&m, row, 0, 0, 0, 0).unwrap_err();
        assert!(matches!(root(&err), JaggedError::SourceRowOutOfRange));
    }
    for column in [3, -3] {
        let err = move_cell(&m, 1, column, 0, 0, 0).unwrap_err();
        assert!(matches!(
            root(&err),
            JaggedError::SourceColumnOutOfRange { row: 1 }
        ));
    }
}

#[test]
fn move_cell_destination_before_start() {
    let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let err = move_cell(&m, 0, 0, -3, 0, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::DestinationOutOfRange));

    let err = move_cell(&m, 0, 0, 1, -4, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::DestinationOutOfRange));

    // a row that does not exist yet has no columns to count back from
    let err = move_cell(&m, 0, 0, 5, -1, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::DestinationOutOfRange));
}

#[test]
fn context_is_kept() {
    let err = remove_column(&[vec![1]], 4).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "removing column 4 from a row of 1 cells: index out of range for row 0"
    );
}

#[test]
fn move_cell_growth_that_cannot_be_allocated() {
    let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let err = move_cell(&m, 0, 0, 0, isize::MAX, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::Capacity(_)));

    let err = move_cell(&m, 0, 0, isize::MAX, 0, 0).unwrap_err();
    assert!(matches!(root(&err), JaggedError::Capacity(_)));
}
