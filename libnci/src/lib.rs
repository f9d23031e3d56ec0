// libnci/src/lib.rs

//! libnci
//!
//! Host-side NFC Controller Interface (NCI) stack: a packet codec and
//! protocol engine, a tag session orchestrator on top of it, and a Type-2
//! tag reader.
#![warn(missing_docs)]

pub mod constants;
pub mod controller;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod tags;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
