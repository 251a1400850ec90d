//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under normal dynamics:
//! - Bachelier model with price, delta and vega
//! - Standard normal CDF and PDF helpers
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Fail fast**: All validation happens at construction; pricing
//!   methods are infallible
//! - **Degenerate limits**: Zero volatility and zero expiry collapse to
//!   the intrinsic-value branch rather than erroring

pub mod bachelier;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use bachelier::{Bachelier, OptionType};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
