use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    inner: DenseMatrix<f64>,
}

impl From<DenseMatrix<f64>> for PyMatrix {
    fn from(inner: DenseMatrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(DenseMatrix::from_list(lines)?.into())
    }

    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, rows: usize, cols: usize) -> PyResult<Self> {
        Ok(DenseMatrix::<f64>::zeros(rows, cols)?.into())
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
        Ok(DenseMatrix::<f64>::identity(n)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.get(row, col)?)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set(row, col, value)?)
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok((&self.inner * &rhs.inner)?.into())
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn solve(&self, target: Vec<f64>) -> PyResult<Vec<f64>> {
        Ok(self.inner.solve(&target)?)
    }

    pub fn reorder_rows(&mut self) {
        self.inner.reorder_rows();
    }

    pub fn reorder_columns(&mut self) {
        self.inner.reorder_columns();
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({:?})", self.inner.to_list())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(all(test, feature = "python"))]
mod tests {
    use super::*;

    fn sample() -> PyMatrix {
        DenseMatrix::from_list(vec![vec![1.0, 2.0], vec![2.0, 4.0]])
            .unwrap()
            .into()
    }

    #[test]
    fn test_error_mapping() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err: PyErr = MatrixError::IndexOutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2,
            }
            .into();
            assert!(err.is_instance_of::<PyIndexError>(py));
            assert_eq!(
                err.value(py).to_string(),
                "index (2, 0) out of range for 2x2 matrix"
            );

            let err: PyErr = MatrixError::Singular { magnitude: 0.0 }.into();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(!err.is_instance_of::<PyIndexError>(py));

            let err: PyErr = MatrixError::NotSquare { rows: 1, cols: 2 }.into();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_matrix_methods() {
        pyo3::prepare_freethreaded_python();
        let mut m = sample();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.T().to_list(), vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(m.determinant().unwrap(), 0.0);

        Python::with_gil(|py| {
            assert!(m.get(5, 0).unwrap_err().is_instance_of::<PyIndexError>(py));
            assert!(m.set(0, 9, 1.0).unwrap_err().is_instance_of::<PyIndexError>(py));
            assert!(m.inverse().unwrap_err().is_instance_of::<PyValueError>(py));
            assert!(m
                .solve(vec![1.0, 2.0])
                .unwrap_err()
                .is_instance_of::<PyValueError>(py));
        });

        m.set(1, 1, 5.0).unwrap();
        assert_eq!(m.solve(vec![3.0, 7.0]).unwrap(), vec![1.0, 1.0]);

        m.reorder_columns();
        assert_eq!(m.to_list(), vec![vec![1.0, 2.0], vec![2.0, 5.0]]);
        assert_eq!(m.__repr__(), "Matrix([[1.0, 2.0], [2.0, 5.0]])");
    }
}
