use crate::error::Result;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Result<Self>;
    fn transpose(&self) -> Self;
    fn determinant(&self) -> Result<T>;
    fn inverse(&self) -> Result<Self>;
    fn solve(&self, target: &[T]) -> Result<Vec<T>>;
    fn at(&self, row: usize, col: usize) -> T;
}
