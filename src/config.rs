use num_traits::Float;

use crate::error::{MatrixError, Result};

/// Absolute threshold under which a determinant or pivot counts as zero.
pub const SINGULAR_EPSILON: f64 = 1e-10;

/// Numeric settings shared by the inverse and solver engines.
///
/// The threshold is compared against absolute magnitudes, so matrices whose
/// entries are all very small (or very large) can be misclassified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinalgConfig {
    singular_epsilon: f64,
}

impl Default for LinalgConfig {
    fn default() -> Self {
        LinalgConfig {
            singular_epsilon: SINGULAR_EPSILON,
        }
    }
}

impl LinalgConfig {
    /// Only finite thresholds above zero are accepted; anything else would
    /// never flag a singular matrix.
    pub fn with_singular_epsilon(singular_epsilon: f64) -> Result<Self> {
        if !singular_epsilon.is_finite() || singular_epsilon <= 0.0 {
            return Err(MatrixError::InvalidThreshold {
                value: singular_epsilon,
            });
        }
        Ok(LinalgConfig { singular_epsilon })
    }

    pub fn singular_epsilon(&self) -> f64 {
        self.singular_epsilon
    }

    /// The threshold in the element type. Falls back to the smallest
    /// positive value if the element type cannot represent it or it
    /// underflows to zero.
    pub fn epsilon<T: Float>(&self) -> T {
        T::from(self.singular_epsilon)
            .filter(|e| *e > T::zero())
            .unwrap_or_else(T::min_positive_value)
    }

    pub fn is_negligible<T: Float>(&self, value: T) -> bool {
        value.abs() < self.epsilon()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
