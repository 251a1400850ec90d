//! # rateform_core: Mathematical Foundation for Rates Analytics
//!
//! Foundation layer of the rateform workspace, providing:
//! - Exact real-root solving for cubic polynomials (`math::cubic`)
//! - Error types: `CubicError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer depends on no other rateform crate, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rateform_core::math::cubic::CubicPolynomial;
//!
//! // x³ - 6x² + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let cubic = CubicPolynomial::new(&[1.0_f64, -6.0, 11.0, -6.0]).unwrap();
//! let roots = cubic.roots();
//!
//! assert_eq!(roots.len(), 3);
//! assert!((roots[0] - 1.0).abs() < 1e-12);
//! assert!((roots[2] - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types and classifications

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
