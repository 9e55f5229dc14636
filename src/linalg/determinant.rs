use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Element};

/// The matrix with `row` and `col` removed, remaining entries kept in order.
///
/// Always a fresh value; the recursion in [`determinant`] never writes into
/// a shared buffer.
pub fn minor<T: Element>(m: &DenseMatrix<T>, row: usize, col: usize) -> Result<DenseMatrix<T>> {
    let n = m.order()?;
    if row >= n || col >= n {
        return Err(MatrixError::IndexOutOfRange {
            row,
            col,
            rows: n,
            cols: n,
        });
    }
    if n == 1 {
        return Err(MatrixError::EmptyShape { rows: 0, cols: 0 });
    }

    Ok(DenseMatrix {
        rows: n - 1,
        cols: n - 1,
        cells: (0..n)
            .filter(|&r| r != row)
            .flat_map(|r| (0..n).filter(move |&c| c != col).map(move |c| m.at(r, c)))
            .collect(),
    })
}

/// Laplace expansion along row 0. Cost is `O(n!)`, so only small matrices
/// are practical.
pub fn determinant<T: Element>(m: &DenseMatrix<T>) -> Result<T> {
    let n = m.order()?;
    if n == 1 {
        return Ok(m.at(0, 0));
    }

    let mut det = T::zero();
    let mut sign = T::one();
    for j in 0..n {
        let sub = minor(m, 0, j)?;
        det = det + sign * m.at(0, j) * determinant(&sub)?;
        sign = -sign;
    }
    Ok(det)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
