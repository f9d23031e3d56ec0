//! Byte buffer dumps for log output.
//!
//! `HexDump` formats lazily, so wrapping a buffer in a `trace!` call costs
//! nothing when the level is disabled.

use std::fmt;

/// Display adapter printing bytes as lowercase hex separated by spaces.
///
/// Example: `HexDump(&[0x20, 0x00, 0x01])` -> `"20 00 01"`
#[derive(Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Log `bytes` at `level` as `"<prefix>(<len>) <hex>"`.
pub fn log_buffer(level: log::Level, prefix: &str, bytes: &[u8]) {
    log::log!(level, "{}({}) {}", prefix, bytes.len(), HexDump(bytes));
}
