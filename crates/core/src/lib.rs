//! Valuator Core - Startup valuation engine.
//!
//! This crate contains the calculation logic for the six supported
//! valuation methods. It is presentation-agnostic: every operation is a
//! pure function of its inputs and returns an immutable result record
//! that UI, export, and reporting layers consume as-is.

pub mod constants;
pub mod errors;
pub mod utils;
pub mod validation;
pub mod valuation;

// Re-export the method modules' public types
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
