//! In-place reordering through short-lived mutable views.
//!
//! A view borrows the matrix it reorders and owns nothing; once the view is
//! dropped the new order is visible through the original binding.

use itertools::Itertools;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseMatrix, Element};

pub trait Reorder {
    fn reorder(&mut self);
}

/// Orders whole rows ascending by their first column.
///
/// Compare-exchange over every pair `i < j`, so rows with equal keys may
/// change relative order.
pub struct RowReorder<'a, T> {
    matrix: &'a mut DenseMatrix<T>,
}

/// Sorts the values of every row ascending, each row on its own.
///
/// For every column pair `i < j` the cells `(k, i)` and `(k, j)` of each row
/// `k` are exchanged when out of order. Columns are never moved as units.
pub struct ColumnReorder<'a, T> {
    matrix: &'a mut DenseMatrix<T>,
}

impl<T: Element> Reorder for RowReorder<'_, T> {
    fn reorder(&mut self) {
        let m = &mut *self.matrix;
        for (i, j) in (0..m.rows).tuple_combinations() {
            if m.at(i, 0) > m.at(j, 0) {
                m.swap_rows(i, j);
            }
        }
    }
}

impl<T: Element> Reorder for ColumnReorder<'_, T> {
    fn reorder(&mut self) {
        let m = &mut *self.matrix;
        let cols = m.cols;
        for (i, j) in (0..cols).tuple_combinations() {
            for k in 0..m.rows {
                if m.at(k, i) > m.at(k, j) {
                    m.cells.swap(k * cols + i, k * cols + j);
                }
            }
        }
    }
}

impl<T: Element> DenseMatrix<T> {
    pub fn row_reorder(&mut self) -> RowReorder<'_, T> {
        RowReorder { matrix: self }
    }

    pub fn column_reorder(&mut self) -> ColumnReorder<'_, T> {
        ColumnReorder { matrix: self }
    }

    pub fn reorder_rows(&mut self) {
        self.row_reorder().reorder();
    }

    pub fn reorder_columns(&mut self) {
        self.column_reorder().reorder();
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
