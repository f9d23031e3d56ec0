// libnci/src/constants.rs
//! NCI wire constants shared by the codec, the controller engine and the
//! tag handlers.

/// Packet header size: MT/PBF/GID byte, OID byte, payload length byte.
pub const NCI_HEADER_LEN: usize = 3;

/// Largest payload a single (unsegmented) packet can carry.
pub const NCI_MAX_PAYLOAD_LEN: usize = 255;

/// Header byte 0 layout
pub const NCI_MT_MASK: u8 = 0xE0;
pub const NCI_MT_SHIFT: u8 = 5;
pub const NCI_PBF_MASK: u8 = 0x10;
pub const NCI_GID_MASK: u8 = 0x0F;
/// Header byte 1 layout
pub const NCI_OID_MASK: u8 = 0x3F;

/// Group identifiers
pub const NCI_GID_CORE: u8 = 0x00;
pub const NCI_GID_RF_MANAGE: u8 = 0x01;

/// CORE group opcodes
pub const NCI_MSG_CORE_RESET: u8 = 0x00;
pub const NCI_MSG_CORE_INIT: u8 = 0x01;
pub const NCI_MSG_CORE_CONN_CREDITS: u8 = 0x06;

/// RF management group opcodes
pub const NCI_MSG_RF_DISCOVER_MAP: u8 = 0x00;
pub const NCI_MSG_RF_DISCOVER: u8 = 0x03;
pub const NCI_MSG_RF_INTF_ACTIVATED: u8 = 0x05;
pub const NCI_MSG_RF_DEACTIVATE: u8 = 0x06;

/// Payload sizes of fixed-length responses and notifications.
pub const NCI_CORE_PARAM_SIZE_RESET_RSP: usize = 3;
/// Minimum CORE_INIT_RSP payload (status, features, zero interfaces and the
/// fixed tail).
pub const NCI_CORE_PARAM_SIZE_INIT_RSP: usize = 0x11;
pub const NCI_RF_PARAM_SIZE_DISCOVER_MAP_RSP: usize = 1;
pub const NCI_RF_PARAM_SIZE_DISCOVER_RSP: usize = 1;
pub const NCI_RF_PARAM_SIZE_INTF_ACTIVATED_NTF: usize = 0x0B;
pub const NCI_RF_PARAM_SIZE_DEACTIVATE_RSP: usize = 1;
pub const NCI_RF_PARAM_SIZE_DEACTIVATE_NTF: usize = 2;

/// Bytes per discovery map entry (protocol, mode, interface).
pub const NCI_DISCOVER_MAP_ENTRY_LEN: usize = 3;
/// Bytes per discovery configuration entry (technology, frequency).
pub const NCI_DISCOVER_CONF_ENTRY_LEN: usize = 2;

/// Largest conn id addressable in a DATA header.
pub const NCI_MAX_CONN_ID: u8 = 0x0F;
/// Static RF connection used for frames exchanged with an activated tag.
pub const NCI_CID_RF_STATIC: u8 = 0x00;

/// Poll-A NFCID is at most 10 bytes (triple size UID).
pub const NFCID_MAX_LEN: usize = 10;

/// Discovery frequency: poll on every cycle.
pub const NCI_DISCOVERY_FREQUENCY_ALWAYS: u8 = 0x01;

/// Type 2 tag command set
pub const T2T_CMD_READ: u8 = 0x30;
pub const T2T_BLOCK_SIZE: usize = 4;
/// Blocks returned by one READ.
pub const T2T_READ_BLOCKS: u8 = 4;
pub const T2T_FIRST_BLOCK: u8 = 0;
/// Last block of the static memory layout.
pub const T2T_LAST_BLOCK: u8 = 15;
/// Data bytes returned by one READ.
pub const T2T_READ_LEN: usize = T2T_READ_BLOCKS as usize * T2T_BLOCK_SIZE;

/// Classification heuristics (NXP AN1303 / AN1305).
pub const NFCID_DOUBLE_SIZE: usize = 7;
pub const NFCID_MANUFACTURER_NXP: u8 = 0x04;
pub const SEL_RES_MIFARE_MASK: u8 = 0x18;
