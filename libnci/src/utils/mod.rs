//! Utilities for libnci: small, reusable helpers used across the crate.
//!
//! Currently this is the byte dump used by the TX/RX trace logs.

pub mod dump;

pub use dump::*;
