//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from analytical model construction

use thiserror::Error;

/// Analytical pricing errors.
///
/// All failures are raised synchronously at construction time (fail fast);
/// pricing methods on a constructed model are infallible.
///
/// # Variants
/// - `NonFiniteParameter`: A numeric parameter is NaN or infinite
/// - `InvalidExpiry`: Negative time to expiry
/// - `InvalidVolatility`: Negative volatility
///
/// # Examples
/// ```
/// use rateform_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticalError {
    /// A numeric parameter is NaN or infinite.
    #[error("Non-finite parameter {name}: {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter
        name: String,
        /// The offending value
        value: f64,
    },

    /// Negative time to expiry.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Negative volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_parameter_display() {
        let err = AnalyticalError::NonFiniteParameter {
            name: "strike".to_string(),
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite parameter strike: NaN");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = -1");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidVolatility { volatility: -0.1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
