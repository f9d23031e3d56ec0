// libnci/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use codec::{MessageKind, identify};
pub use commands::Command;
pub use frame::{Frame, Header, MessageType};
pub use responses::{
    decode_core_init_rsp, decode_core_reset_rsp, decode_rf_deactivate_ntf,
    decode_rf_deactivate_rsp, decode_rf_discover_map_rsp, decode_rf_discover_rsp,
    decode_rf_intf_activated_ntf,
};
