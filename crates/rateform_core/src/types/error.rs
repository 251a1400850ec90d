//! Error types for structured error handling.
//!
//! This module provides:
//! - `CubicError`: Errors from cubic polynomial construction

use thiserror::Error;

/// Cubic polynomial construction errors.
///
/// All failures are reported synchronously at construction time; no
/// partially-constructed polynomial is ever observable.
///
/// # Variants
/// - `InvalidCoefficientCount`: Coefficient sequence length is not 4
/// - `NonFiniteCoefficient`: A coefficient is NaN or infinite
/// - `ZeroLeadingCoefficient`: Leading coefficient is zero (not a true cubic)
///
/// # Examples
/// ```
/// use rateform_core::types::CubicError;
///
/// let err = CubicError::InvalidCoefficientCount { count: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Expected 4 coefficients, got 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicError {
    /// Coefficient sequence length is not 4.
    #[error("Expected 4 coefficients, got {count}")]
    InvalidCoefficientCount {
        /// Number of coefficients provided
        count: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("Non-finite coefficient at index {index}: {value}")]
    NonFiniteCoefficient {
        /// Index of the offending coefficient
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Leading coefficient is zero; the polynomial degenerates to a
    /// quadratic and monic normalisation would divide by zero.
    #[error("Leading coefficient must be nonzero")]
    ZeroLeadingCoefficient,
}
