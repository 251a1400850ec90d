//! Closed-form mathematical building blocks.
//!
//! This module provides exact (non-iterative) numerical routines used by
//! rates analytics, currently the cubic polynomial root solver.
//!
//! ## Available Components
//!
//! - [`cubic::CubicPolynomial`]: degree-3 real polynomial with exact root
//!   extraction via Cardano's formula and Viète's trigonometric method
//!
//! All routines use a generic type parameter `T: num_traits::Float` for
//! f32/f64 support.

pub mod cubic;

// Re-export public types at module level
pub use cubic::{CubicPolynomial, RootStructure};
