use crate::config::LinalgConfig;
use crate::error::{MatrixError, Result};
use crate::linalg::determinant::{determinant, minor};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Element};

/// `cofactor[i][j] = (-1)^(i+j) * det(minor(i, j))`.
pub fn cofactor_matrix<T: Element>(m: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    let n = m.order()?;
    // The only minor of a 1x1 matrix is empty, with determinant 1
    if n == 1 {
        return DenseMatrix::identity(1);
    }

    let mut cofactors = DenseMatrix::zeros(n, n)?;
    for i in 0..n {
        for j in 0..n {
            let det = determinant(&minor(m, i, j)?)?;
            cofactors[(i, j)] = if (i + j) % 2 == 0 { det } else { -det };
        }
    }
    Ok(cofactors)
}

pub fn adjugate<T: Element>(m: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    Ok(cofactor_matrix(m)?.transpose())
}

pub fn inverse<T: Element>(m: &DenseMatrix<T>, config: &LinalgConfig) -> Result<DenseMatrix<T>> {
    let det = determinant(m)?;
    if config.is_negligible(det) {
        return Err(MatrixError::Singular {
            magnitude: det.abs().to_f64().unwrap_or(0.0),
        });
    }

    let mut adj = adjugate(m)?;
    adj.cells.iter_mut().for_each(|c| *c = *c / det);
    Ok(adj)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_inverse_2x2() {
        let m = DenseMatrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let inv = m.inverse().unwrap();
        let expected = DenseMatrix::from_list(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap();
        assert!(inv.approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_inverse_1x1() {
        let m = DenseMatrix::from_list(vec![vec![4.0]]).unwrap();
        assert_eq!(m.inverse().unwrap().to_list(), vec![vec![0.25]]);
    }

    #[test]
    fn test_cofactors() {
        let m = DenseMatrix::from_list(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 4.0, 5.0],
            vec![1.0, 0.0, 6.0],
        ])
        .unwrap();
        assert_eq!(
            cofactor_matrix(&m).unwrap().to_list(),
            vec![
                vec![24.0, 5.0, -4.0],
                vec![-12.0, 3.0, 2.0],
                vec![-2.0, -5.0, 4.0],
            ]
        );
        assert_eq!(
            adjugate(&m).unwrap().to_list(),
            vec![
                vec![24.0, -12.0, -2.0],
                vec![5.0, 3.0, -5.0],
                vec![-4.0, 2.0, 4.0],
            ]
        );
    }

    #[test]
    fn test_inverse_singular() {
        let m = DenseMatrix::from_list(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(m.inverse(), Err(MatrixError::Singular { magnitude: 0.0 }));

        // absolute threshold: tiny but regular matrices are rejected too
        let tiny = DenseMatrix::from_list(vec![vec![1e-6, 0.0], vec![0.0, 1e-6]]).unwrap();
        assert!(matches!(tiny.inverse(), Err(MatrixError::Singular { .. })));
        let relaxed = LinalgConfig::with_singular_epsilon(1e-15).unwrap();
        assert!(tiny.inverse_with(&relaxed).is_ok());
    }

    #[test]
    fn test_inverse_not_square() {
        let m = DenseMatrix::<f64>::zeros(3, 2).unwrap();
        assert_eq!(m.inverse(), Err(MatrixError::NotSquare { rows: 3, cols: 2 }));
    }

    #[test]
    fn test_inverse_product_is_identity() {
        let mut rng = StdRng::seed_from_u64(1234);
        for n in 1..=5 {
            let m = DenseMatrix::<f64>::random(n, n, &mut rng).unwrap();
            if m.determinant().unwrap().abs() < 1e-3 {
                continue;
            }
            let inv = m.inverse().unwrap();
            let id = DenseMatrix::identity(n).unwrap();

            let left = (&m * &inv).unwrap();
            let right = (&inv * &m).unwrap();
            for i in 0..n {
                for j in 0..n {
                    assert_abs_diff_eq!(left[(i, j)], id[(i, j)], epsilon = 1e-9);
                    assert_abs_diff_eq!(right[(i, j)], id[(i, j)], epsilon = 1e-9);
                }
            }
        }
    }
}
