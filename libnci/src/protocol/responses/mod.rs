// libnci/src/protocol/responses/mod.rs

//! Per-message decoders for controller responses and notifications.
//!
//! Each decoder receives the packet payload (header stripped) and checks
//! the declared length before looking at the status byte, so a malformed
//! packet is reported as such even when it carries a failure status.

pub mod core;
pub mod rf;

pub use self::core::{decode_core_init_rsp, decode_core_reset_rsp};
pub use self::rf::{
    decode_rf_deactivate_ntf, decode_rf_deactivate_rsp, decode_rf_discover_map_rsp,
    decode_rf_discover_rsp, decode_rf_intf_activated_ntf,
};
