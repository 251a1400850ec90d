//! Bachelier (normal) pricing model for European options.
//!
//! This module prices European options under normal (arithmetic) dynamics,
//! the standard convention for interest rate options where negative forwards
//! are possible.
//!
//! ## Mathematical Formulas
//!
//! With moneyness `m = F - K`, standard deviation `s = σ√T`, `d = m / s`
//! and `θ = +1` for calls, `-1` for puts:
//!
//! **Price**: θ·m·N(θ·d) + s·φ(d)
//! **Delta**: θ·N(θ·d)
//! **Vega**: √T·φ(d)
//!
//! When `s = 0` (zero volatility or zero time to expiry) the option
//! collapses to its intrinsic value: price `max(θ·m, 0)`, delta `θ` when
//! strictly in the money else `0`, vega `0` by convention.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Call/put selector for a priced option.
///
/// # Examples
/// ```
/// use rateform_models::analytical::OptionType;
///
/// assert_eq!(OptionType::Call.sign::<f64>(), 1.0);
/// assert_eq!(OptionType::Put.sign::<f64>(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: pays max(F - K, 0) at expiry.
    Call,
    /// Put option: pays max(K - F, 0) at expiry.
    Put,
}

impl OptionType {
    /// Returns the payoff sign θ: `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            OptionType::Call => T::one(),
            OptionType::Put => -T::one(),
        }
    }
}

/// Bachelier (normal) model quote for a single European option.
///
/// An immutable value object holding the option parameters, validated at
/// construction. Pricing and sensitivity methods are infallible and free
/// of side effects.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use rateform_models::analytical::{Bachelier, OptionType};
///
/// let call = Bachelier::new(0.02_f64, 0.03, 2.0, 0.005, OptionType::Call).unwrap();
/// let put = Bachelier::new(0.02_f64, 0.03, 2.0, 0.005, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = F - K
/// assert!((call.price() - put.price() - 0.01).abs() < 1e-12);
/// // Delta parity: Δ_call - Δ_put = 1
/// assert!((call.delta() - put.delta() - 1.0).abs() < 1e-12);
/// // Vega is identical for calls and puts
/// assert_eq!(call.vega(), put.vega());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bachelier<T: Float> {
    /// Strike price (K).
    strike: T,
    /// Forward price (F) - can be negative.
    forward: T,
    /// Time to expiry in years (T), non-negative.
    expiry: T,
    /// Normal volatility (σ), non-negative.
    volatility: T,
    /// Call/put selector.
    option_type: OptionType,
    /// Cached moneyness F - K.
    moneyness: T,
    /// Cached standard deviation σ√T.
    std_dev: T,
}

impl<T: Float> Bachelier<T> {
    /// Creates a new Bachelier quote.
    ///
    /// Zero volatility and zero expiry are valid; they route pricing to the
    /// degenerate intrinsic-value branch rather than erroring.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `forward` - Forward price (F), may be negative
    /// * `expiry` - Time to expiry in years, must be >= 0
    /// * `volatility` - Normal volatility, must be >= 0
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteParameter` if any numeric field is NaN
    ///   or infinite
    /// - `AnalyticalError::InvalidExpiry` if `expiry < 0`
    /// - `AnalyticalError::InvalidVolatility` if `volatility < 0`
    ///
    /// # Examples
    /// ```
    /// use rateform_models::analytical::{Bachelier, OptionType};
    ///
    /// // Negative forward (interest rates)
    /// let quote = Bachelier::new(0.0_f64, -0.005, 1.0, 0.01, OptionType::Call);
    /// assert!(quote.is_ok());
    ///
    /// // Negative expiry is rejected
    /// assert!(Bachelier::new(0.02_f64, 0.03, -1.0, 0.005, OptionType::Call).is_err());
    /// ```
    pub fn new(
        strike: T,
        forward: T,
        expiry: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        for (name, value) in [
            ("strike", strike),
            ("forward", forward),
            ("expiry", expiry),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteParameter {
                    name: name.to_string(),
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        if expiry < zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            forward,
            expiry,
            volatility,
            option_type,
            moneyness: forward - strike,
            std_dev: volatility * expiry.sqrt(),
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the forward price.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the normal volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the call/put selector.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the moneyness F - K.
    #[inline]
    pub fn moneyness(&self) -> T {
        self.moneyness
    }

    /// Returns the standard deviation σ√T.
    #[inline]
    pub fn std_dev(&self) -> T {
        self.std_dev
    }

    /// The d term m / (σ√T). Callers must ensure `std_dev > 0`.
    #[inline]
    fn d(&self) -> T {
        self.moneyness / self.std_dev
    }

    /// Computes the option price.
    ///
    /// Degenerate case (`σ√T = 0`): the intrinsic value `max(θ·m, 0)`.
    /// Otherwise `θ·m·N(θ·d) + σ√T·φ(d)`. The result is non-negative and
    /// continuous as `σ√T → 0`.
    pub fn price(&self) -> T {
        let zero = T::zero();
        let sign: T = self.option_type.sign();

        if self.std_dev == zero {
            let intrinsic = sign * self.moneyness;
            return intrinsic.max(zero);
        }

        let d = self.d();
        let price = sign * self.moneyness * norm_cdf(sign * d) + self.std_dev * norm_pdf(d);
        // The erfc tail approximation can turn a vanishing deep-out-of-the-money
        // price marginally negative; clamp to preserve the lower bound.
        price.max(zero)
    }

    /// Computes the option delta, the price sensitivity to the forward.
    ///
    /// Degenerate case (`σ√T = 0`): `θ` when strictly in the money, else 0.
    /// Otherwise `θ·N(θ·d)`. Call delta lies in [0, 1], put delta in [-1, 0].
    pub fn delta(&self) -> T {
        let zero = T::zero();
        let sign: T = self.option_type.sign();

        if self.std_dev == zero {
            return if sign * self.moneyness > zero {
                sign
            } else {
                zero
            };
        }

        sign * norm_cdf(sign * self.d())
    }

    /// Computes the option vega, the price sensitivity to volatility.
    ///
    /// Degenerate case (`σ√T = 0`): exactly 0 by convention. Otherwise
    /// `√T·φ(d)`. Always non-negative and identical for calls and puts.
    pub fn vega(&self) -> T {
        let zero = T::zero();

        if self.std_dev == zero {
            return zero;
        }

        self.expiry.sqrt() * norm_pdf(self.d())
    }
}
