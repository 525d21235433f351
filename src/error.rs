use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not invertible")]
    NotInvertible,
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix rows must be non-empty and of equal length")]
    InvalidShape,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn messages() {
    let e = Error::DimensionMismatch {
        lhs_rows: 4,
        lhs_cols: 4,
        rhs_rows: 3,
        rhs_cols: 1,
    };
    assert_eq!(e.to_string(), "cannot multiply a 4x4 matrix by a 3x1 matrix");
    assert_eq!(
        Error::NotSquare { rows: 2, cols: 3 }.to_string(),
        "expected a square matrix, got 2x3"
    );
    assert_eq!(Error::NotInvertible.to_string(), "matrix is not invertible");
}
