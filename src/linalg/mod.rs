//! Exact dense kernels: cofactor determinant, adjugate inverse and
//! Gaussian elimination.

pub mod determinant;
pub mod inverse;
pub mod solve;

pub use determinant::{determinant, minor};
pub use inverse::{adjugate, cofactor_matrix, inverse};
pub use solve::solve;
