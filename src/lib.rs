pub mod config;
pub mod error;
pub mod linalg;
pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
}
pub mod reorder;

#[cfg(feature = "python")]
pub mod python;

pub use config::LinalgConfig;
pub use error::{MatrixError, Result};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::{DenseMatrix, Element};
pub use reorder::{ColumnReorder, Reorder, RowReorder};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn matrix_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
