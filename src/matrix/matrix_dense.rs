use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops;
use std::ops::{Index, IndexMut};

use crate::config::LinalgConfig;
use crate::error::{MatrixError, Result};
use crate::linalg::{determinant, inverse, solve};
use crate::matrix::matrix::Matrix;

pub trait Element:  // Bounds every cell type needs
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug {}

/// Dense matrix stored in row-major order.
///
/// Always at least 1x1, and `cells.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: Element> Matrix<T> for DenseMatrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::RaggedRow {
                row,
                len: line.len(),
                expected: cols,
            });
        }

        Ok(DenseMatrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn identity(n: usize) -> Result<Self> {
        Self::check_shape(n, n)?;
        Ok(DenseMatrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    fn transpose(&self) -> Self {
        DenseMatrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    fn determinant(&self) -> Result<T> {
        determinant::determinant(self)
    }

    fn inverse(&self) -> Result<Self> {
        self.inverse_with(&LinalgConfig::default())
    }

    fn solve(&self, target: &[T]) -> Result<Vec<T>> {
        self.solve_with(target, &LinalgConfig::default())
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: Element> DenseMatrix<T> {
    fn check_shape(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        Ok(())
    }

    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        Ok(DenseMatrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    /// Matrix with cells drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self>
    where
        T: SampleUniform,
    {
        Self::check_shape(rows, cols)?;
        Ok(DenseMatrix {
            rows,
            cols,
            cells: (0..rows * cols)
                .map(|_| rng.gen_range(-T::one()..T::one()))
                .collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Side length of a square matrix.
    pub fn order(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.check_index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.check_index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Slice of the given row. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    fn check_same_shape(&self, rhs: &DenseMatrix<T>, op: &'static str) -> Result<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }
        Ok(())
    }

    fn zip_cells(&self, rhs: &DenseMatrix<T>, f: impl Fn(T, T) -> T) -> DenseMatrix<T> {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }

    pub fn add(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.check_same_shape(rhs, "add")?;
        Ok(self.zip_cells(rhs, |a, b| a + b))
    }

    pub fn subtract(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.check_same_shape(rhs, "subtract")?;
        Ok(self.zip_cells(rhs, |a, b| a - b))
    }

    pub fn multiply(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: (self.rows, self.cols),
                rhs: (rhs.rows, rhs.cols),
            });
        }

        Ok(DenseMatrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }

    /// `self . x`, used to check a solution against its right-hand side.
    pub fn mul_vector(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "mul_vector",
                lhs: (self.rows, self.cols),
                rhs: (x.len(), 1),
            });
        }

        Ok((0..self.rows)
            .map(|i| self.row(i).iter().zip(x).map(|(a, b)| *a * *b).sum())
            .collect())
    }

    pub fn inverse_with(&self, config: &LinalgConfig) -> Result<DenseMatrix<T>> {
        inverse::inverse(self, config)
    }

    pub fn solve_with(&self, target: &[T], config: &LinalgConfig) -> Result<Vec<T>> {
        solve::solve(self, target, config)
    }

    /// Same shape and every cell within `tolerance` of the other.
    pub fn approx_eq(&self, other: &DenseMatrix<T>, tolerance: T) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }
}

impl<T: Element> ops::Add<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn add(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        DenseMatrix::add(self, rhs)
    }
}

impl<T: Element> ops::Sub<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn sub(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.subtract(rhs)
    }
}

impl<T: Element> ops::Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>>;

    fn mul(self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.multiply(rhs)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index out of range");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index out of range");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: Element> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.cols) {
            for value in line {
                write!(f, "{:10.2} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
