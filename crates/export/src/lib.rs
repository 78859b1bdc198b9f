//! Valuator Export - calculation history and document export.
//!
//! The history log is caller-owned: the engine in `valuator-core` never
//! reads or writes it. This crate appends engine results to the log and
//! serializes log slices to CSV, JSON, XML, and plain text.

pub mod errors;
pub mod export;
pub mod history;

pub use errors::{ExportError, Result};
pub use export::*;
pub use history::*;
