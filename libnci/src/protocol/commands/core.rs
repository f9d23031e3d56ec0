// libnci/src/protocol/commands/core.rs

use crate::types::ResetType;

/// Encode CORE_RESET_CMD payload: reset type (1 byte)
pub fn encode_core_reset(reset_type: ResetType) -> Vec<u8> {
    vec![reset_type.as_u8()]
}

/// Encode CORE_INIT_CMD payload (empty in NCI 1.x)
pub fn encode_core_init() -> Vec<u8> {
    Vec::new()
}
