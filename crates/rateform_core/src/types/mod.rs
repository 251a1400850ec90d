//! Foundation types shared across the crate.
//!
//! This module provides:
//! - Error types: `CubicError` (`error`)

pub mod error;

pub use error::CubicError;
