//! Exact real-root solver for cubic polynomials.
//!
//! This module provides [`CubicPolynomial`], a degree-3 real polynomial with
//! closed-form root extraction. The root structure is classified once at
//! construction via the discriminant of the depressed cubic:
//!
//! - `Δ > 0`: one real root (Cardano's formula)
//! - `Δ = 0`: three real roots with at least one repeat
//! - `Δ < 0`: three distinct real roots (Viète's trigonometric method)
//!
//! All computations use a generic type parameter `T: Float` for f32/f64
//! support. No iteration is involved; every operation is O(1) arithmetic.

use num_traits::Float;
use std::cmp::Ordering;

use crate::types::CubicError;

/// Discriminants within this band of zero are snapped to exactly zero to
/// absorb floating-point cancellation near repeated roots.
const DISCRIMINANT_TOLERANCE: f64 = 1e-15;

/// π / 3
const FRAC_PI_3: f64 = std::f64::consts::FRAC_PI_3;

/// π / 6
const FRAC_PI_6: f64 = std::f64::consts::FRAC_PI_6;

/// Classification of a cubic's real-root structure by discriminant sign.
///
/// # Variants
/// - `OneReal`: `Δ > 0`, a single real root (the complex conjugate pair is
///   not returned)
/// - `RepeatedReal`: `Δ = 0`, three real roots with a double or triple repeat
/// - `ThreeDistinctReal`: `Δ < 0`, three distinct real roots
///
/// # Examples
/// ```
/// use rateform_core::math::cubic::{CubicPolynomial, RootStructure};
///
/// let cubic = CubicPolynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]).unwrap();
/// assert_eq!(cubic.root_structure(), RootStructure::ThreeDistinctReal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootStructure {
    /// One real root, two complex conjugate roots.
    OneReal,
    /// Three real roots, at least one repeated.
    RepeatedReal,
    /// Three distinct real roots.
    ThreeDistinctReal,
}

/// A degree-3 real polynomial `a3·x³ + a2·x² + a1·x + a0` with exact
/// real-root extraction.
///
/// The polynomial is immutable once constructed. Normalisation to monic
/// form, reduction to the depressed cubic `t³ + pt + q`, and the
/// discriminant `Δ = (q/2)² + (p/3)³` are all computed eagerly at
/// construction, so [`roots`](CubicPolynomial::roots) and
/// [`evaluate`](CubicPolynomial::evaluate) never fail.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use rateform_core::math::cubic::CubicPolynomial;
///
/// // (x - 1)(x - 2)² = x³ - 5x² + 8x - 4
/// let cubic = CubicPolynomial::new(&[1.0_f64, -5.0, 8.0, -4.0]).unwrap();
///
/// let roots = cubic.roots();
/// assert_eq!(roots.len(), 3);
/// assert!((roots[0] - 1.0).abs() < 1e-12);
/// assert!((roots[1] - 2.0).abs() < 1e-12);
/// assert!((roots[2] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPolynomial<T: Float> {
    /// Coefficients in descending degree order (a3, a2, a1, a0).
    coefficients: [T; 4],
    /// Normalised quadratic coefficient a = a2/a3 (for the inflection offset).
    a: T,
    /// Depressed-cubic linear coefficient p = b - a²/3.
    p: T,
    /// Depressed-cubic constant term q = 2a³/27 - ab/3 + c.
    q: T,
    /// Discriminant Δ = (q/2)² + (p/3)³, snapped to zero within tolerance.
    discriminant: T,
}

impl<T: Float> CubicPolynomial<T> {
    /// Creates a cubic polynomial from coefficients in descending degree
    /// order `(a3, a2, a1, a0)`.
    ///
    /// # Arguments
    /// * `coefficients` - Slice of exactly 4 finite values; the leading
    ///   coefficient must be nonzero
    ///
    /// # Errors
    /// - `CubicError::InvalidCoefficientCount` if the slice length is not 4
    /// - `CubicError::NonFiniteCoefficient` if any coefficient is NaN or
    ///   infinite
    /// - `CubicError::ZeroLeadingCoefficient` if `a3 == 0` (a quadratic,
    ///   not a true cubic; normalisation would divide by zero)
    ///
    /// # Examples
    /// ```
    /// use rateform_core::math::cubic::CubicPolynomial;
    ///
    /// let cubic = CubicPolynomial::new(&[1.0_f64, 1.0, 1.0, -3.0]).unwrap();
    /// assert_eq!(cubic.roots().len(), 1);
    ///
    /// // Wrong arity
    /// assert!(CubicPolynomial::new(&[1.0_f64, 2.2, -6.0]).is_err());
    ///
    /// // Degenerate leading coefficient
    /// assert!(CubicPolynomial::new(&[0.0_f64, -2.0, 4.0, -2.3]).is_err());
    /// ```
    pub fn new(coefficients: &[T]) -> Result<Self, CubicError> {
        if coefficients.len() != 4 {
            return Err(CubicError::InvalidCoefficientCount {
                count: coefficients.len(),
            });
        }

        for (index, &value) in coefficients.iter().enumerate() {
            if !value.is_finite() {
                return Err(CubicError::NonFiniteCoefficient {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let zero = T::zero();
        if coefficients[0] == zero {
            return Err(CubicError::ZeroLeadingCoefficient);
        }

        let coefficients = [
            coefficients[0],
            coefficients[1],
            coefficients[2],
            coefficients[3],
        ];

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let twenty_seven = T::from(27.0).unwrap();

        // Normalise to monic form: x³ + ax² + bx + c
        let a = coefficients[1] / coefficients[0];
        let b = coefficients[2] / coefficients[0];
        let c = coefficients[3] / coefficients[0];

        // Depressed cubic t³ + pt + q via x = t - a/3
        let p = b - a * a / three;
        let q = two * a.powi(3) / twenty_seven - a * b / three + c;

        // Discriminants within [-tol, +tol] are rounded to 0 to account
        // for floating-point cancellation near repeated roots.
        let tolerance = T::from(DISCRIMINANT_TOLERANCE).unwrap();
        let raw = (q / two).powi(2) + (p / three).powi(3);
        let discriminant = if raw.abs() < tolerance { zero } else { raw };

        Ok(Self {
            coefficients,
            a,
            p,
            q,
            discriminant,
        })
    }

    /// Returns the coefficients in descending degree order.
    #[inline]
    pub fn coefficients(&self) -> [T; 4] {
        self.coefficients
    }

    /// Returns the discriminant `Δ = (q/2)² + (p/3)³` of the depressed
    /// cubic, snapped to zero within the internal tolerance.
    #[inline]
    pub fn discriminant(&self) -> T {
        self.discriminant
    }

    /// Classifies the real-root structure from the discriminant sign.
    #[inline]
    pub fn root_structure(&self) -> RootStructure {
        let zero = T::zero();
        if self.discriminant > zero {
            RootStructure::OneReal
        } else if self.discriminant < zero {
            RootStructure::ThreeDistinctReal
        } else {
            RootStructure::RepeatedReal
        }
    }

    /// Evaluates the polynomial at `val` using Horner's scheme.
    ///
    /// # Examples
    /// ```
    /// use rateform_core::math::cubic::CubicPolynomial;
    ///
    /// let cubic = CubicPolynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]).unwrap();
    /// assert_eq!(cubic.evaluate(2.0), 0.0);
    /// ```
    #[inline]
    pub fn evaluate(&self, val: T) -> T {
        let [a3, a2, a1, a0] = self.coefficients;
        ((a3 * val + a2) * val + a1) * val + a0
    }

    /// Computes all real roots, sorted ascending.
    ///
    /// Returns exactly one value when `Δ > 0` and exactly three values
    /// (repeats included) when `Δ ≤ 0`. The result is invariant under
    /// scaling of all four coefficients by any nonzero constant, since
    /// normalisation divides it out.
    ///
    /// # Examples
    /// ```
    /// use rateform_core::math::cubic::CubicPolynomial;
    ///
    /// // (x + 5)(x + 1)(x - 10) = x³ - 4x² - 55x - 50
    /// let cubic = CubicPolynomial::new(&[1.0_f64, -4.0, -55.0, -50.0]).unwrap();
    /// let roots = cubic.roots();
    ///
    /// assert!((roots[0] + 5.0).abs() < 1e-9);
    /// assert!((roots[1] + 1.0).abs() < 1e-9);
    /// assert!((roots[2] - 10.0).abs() < 1e-9);
    /// ```
    pub fn roots(&self) -> Vec<T> {
        let zero = T::zero();
        let one = T::one();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        // Centre of symmetry of the cubic; every branch offsets by it to
        // map depressed-cubic roots back to x-space.
        let inflection = -self.a / three;

        if self.discriminant == zero {
            // One simple root and one double root (triple when q = 0).
            let t = (self.q / two).cbrt();
            let simple = -two * t + inflection;
            let double = t + inflection;
            sort_ascending(vec![simple, double, double])
        } else if self.discriminant > zero {
            // Cardano's formula; cbrt preserves sign so both summands are real.
            let sqrt_delta = self.discriminant.sqrt();
            let root = (-self.q / two + sqrt_delta).cbrt()
                + (-self.q / two - sqrt_delta).cbrt()
                + inflection;
            vec![root]
        } else {
            // Viète's trigonometric method. Δ < 0 implies p < 0 and
            // |q / (2r³)| ≤ 1; the clamp absorbs rounding at the boundary.
            let r = (-self.p / three).sqrt();
            let ratio = (self.q / (two * r.powi(3))).max(-one).min(one);
            let theta = ratio.asin();

            let pi_3 = T::from(FRAC_PI_3).unwrap();
            let pi_6 = T::from(FRAC_PI_6).unwrap();

            let root1 = two * r * (theta / three).sin() + inflection;
            let root2 = -two * r * (theta / three + pi_3).sin() + inflection;
            let root3 = two * r * (theta / three + pi_6).cos() + inflection;
            sort_ascending(vec![root1, root2, root3])
        }
    }
}

/// Sorts roots ascending. Inputs are always finite, so the total-order
/// fallback is unreachable.
fn sort_ascending<T: Float>(mut roots: Vec<T>) -> Vec<T> {
    roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    roots
}
