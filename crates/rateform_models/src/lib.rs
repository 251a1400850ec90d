//! # rateform_models: Analytical Pricing Models
//!
//! Model layer of the rateform workspace, providing closed-form pricing
//! and sensitivities for European options:
//! - Bachelier (normal) model with price, delta and vega (`analytical`)
//! - Standard normal distribution helpers (`analytical::distributions`)
//!
//! The Bachelier model assumes arithmetic (normal) dynamics for the
//! underlying forward, which makes it the standard choice for interest
//! rate options where negative forwards are possible.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rateform_models::analytical::{Bachelier, OptionType};
//!
//! let call = Bachelier::new(0.02_f64, 0.03, 2.0, 0.005, OptionType::Call).unwrap();
//! let put = Bachelier::new(0.02_f64, 0.03, 2.0, 0.005, OptionType::Put).unwrap();
//!
//! // Put-call parity: C - P = F - K
//! assert!((call.price() - put.price() - 0.01).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for option types and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
