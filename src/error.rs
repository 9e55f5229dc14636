use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible. Vectors are reported as `(len, 1)`.
    #[error("{op}: dimensions not compatible ({}x{} vs {}x{})", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is singular (magnitude {magnitude:e} below threshold)")]
    Singular { magnitude: f64 },

    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("singularity threshold must be finite and positive, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("matrix must have at least one row and one column, got {rows}x{cols}")]
    EmptyShape { rows: usize, cols: usize },

    #[error("row {row} has {len} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
