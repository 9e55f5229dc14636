use crate::config::LinalgConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Element};

/// Coefficients with the right-hand side appended as an extra column.
fn augmented<T: Element>(m: &DenseMatrix<T>, target: &[T]) -> DenseMatrix<T> {
    DenseMatrix {
        rows: m.rows,
        cols: m.cols + 1,
        cells: (0..m.rows)
            .flat_map(|r| m.row(r).iter().copied().chain(std::iter::once(target[r])))
            .collect(),
    }
}

/// Row `k >= col` with the largest magnitude in `col`; the first one wins
/// on ties.
fn pivot_row<T: Element>(aug: &DenseMatrix<T>, col: usize) -> usize {
    let mut best = col;
    for k in col + 1..aug.rows {
        if aug.at(k, col).abs() > aug.at(best, col).abs() {
            best = k;
        }
    }
    best
}

/// Gaussian elimination with partial pivoting, then back-substitution.
///
/// `m` is left untouched; elimination runs on a transient augmented copy.
/// Over- and under-determined systems are only caught through the zero
/// pivot check.
pub fn solve<T: Element>(
    m: &DenseMatrix<T>,
    target: &[T],
    config: &LinalgConfig,
) -> Result<Vec<T>> {
    let n = m.order()?;
    if target.len() != n {
        return Err(MatrixError::DimensionMismatch {
            op: "solve",
            lhs: (m.rows, m.cols),
            rhs: (target.len(), 1),
        });
    }

    let mut aug = augmented(m, target);

    for i in 0..n {
        let best = pivot_row(&aug, i);
        aug.swap_rows(i, best);

        let pivot = aug.at(i, i);
        if config.is_negligible(pivot) {
            return Err(MatrixError::Singular {
                magnitude: pivot.abs().to_f64().unwrap_or(0.0),
            });
        }

        for k in i + 1..n {
            let factor = aug.at(k, i) / pivot;
            for j in i..=n {
                aug[(k, j)] = aug.at(k, j) - factor * aug.at(i, j);
            }
        }
    }

    let mut solution = vec![T::zero(); n];
    for i in (0..n).rev() {
        let acc = (i + 1..n).fold(aug.at(i, n), |acc, j| acc - aug.at(i, j) * solution[j]);
        solution[i] = acc / aug.at(i, i);
    }

    Ok(solution)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
