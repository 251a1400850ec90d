//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float` for f32/f64
//! support. The CDF is built on the Abramowitz & Stegun 7.1.26 erfc
//! approximation (maximum absolute error 1.5e-7).
//!
//! The reflection `erfc(-x) = 2 - erfc(x)` is applied structurally and the
//! origin is pinned (`norm_cdf(0) == 0.5` exactly), so
//! `norm_cdf(x) + norm_cdf(-x) == 1` holds to machine precision. Identities
//! built on that symmetry (such as Bachelier put-call parity) are therefore
//! exact even though pointwise CDF values carry the approximation error.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// rational approximation, evaluated with Horner's scheme.
///
/// Maximum absolute error 1.5e-7 over all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // The polynomial sums to 0.999999999 at t = 1, leaving a ~1e-9 gap at
    // the origin that the reflection branch (x < 0 only) does not repair.
    // Pin erfc(0) = 1 so Φ(0) = 0.5 exactly and the symmetry identity
    // holds at zero as well.
    if x == T::zero() {
        return one;
    }

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes `Φ(x) = P(X <= x)` for `X ~ N(0, 1)` as `0.5·erfc(-x/√2)`.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability in [0, 1], accurate to 1.5e-7 for all finite x.
///
/// # Examples
/// ```
/// use rateform_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes `φ(x) = exp(-x²/2) / √(2π)`.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value, always non-negative.
///
/// # Examples
/// ```
/// use rateform_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π)
/// assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        // Exact, not merely within approximation accuracy
        assert_eq!(norm_cdf(0.0_f64), 0.5);
        assert_eq!(norm_cdf(-0.0_f64), 0.5);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-5);
    }

    #[test]
    fn test_norm_cdf_symmetry_exact() {
        // Structural identity from the erfc reflection; holds far below
        // the 1.5e-7 pointwise accuracy.
        for x in [-5.0, -2.5, -1.0, -0.1, 0.0, 0.1, 1.0, 2.5, 5.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic_and_bounded() {
        let values: Vec<f64> = (-60..=60).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let lo = norm_cdf(pair[0]);
            let hi = norm_cdf(pair[1]);
            assert!(hi > lo, "CDF not monotonic at x = {}", pair[0]);
            assert!((0.0..=1.0).contains(&lo));
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert!(norm_cdf(8.0_f64) > 0.999999);
        assert!(norm_cdf(-8.0_f64) < 1e-6);
        assert!(norm_cdf(30.0_f64) >= 1.0 - 1e-15);
        assert!(norm_cdf(-30.0_f64) <= 1e-15);
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetric_and_non_negative() {
        for x in [0.5, 1.0, 1.5, 2.0, 3.0, 7.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
            assert!(norm_pdf(x) >= 0.0);
        }
    }

    #[test]
    fn test_cdf_derivative_is_pdf() {
        // Central difference of the CDF should track the PDF within the
        // approximation error amplified by the step size.
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(derivative, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.3989422).abs() < 1e-5);
    }
}
