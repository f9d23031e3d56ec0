// fixtures.rs: commonly used controller frames

use libnci::types::{ActivationRecord, Status};

/// Decode a hex literal; spaces are allowed between bytes.
pub fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("valid hex fixture")
}

/// CORE_RESET_RSP, NCI 1.0, configuration kept
pub fn reset_rsp_ok() -> Vec<u8> {
    bytes("40 00 03 00 10 00")
}

/// CORE_INIT_RSP as a PN7120 sends it
pub fn init_rsp_pn7120() -> Vec<u8> {
    bytes("40 01 13 00 1e 03 00 00 02 01 02 01 00 01 ff 00 04 04 02 00 30 01")
}

pub fn discover_map_rsp_ok() -> Vec<u8> {
    bytes("41 00 01 00")
}

pub fn discover_rsp_ok() -> Vec<u8> {
    bytes("41 03 01 00")
}

pub fn deactivate_rsp_ok() -> Vec<u8> {
    bytes("41 06 01 00")
}

/// RF_DEACTIVATE_NTF: DISCOVERY, DH request
pub fn deactivate_ntf_discovery() -> Vec<u8> {
    bytes("61 06 02 03 00")
}

/// NTAG-style Poll-A activation: NFCID 04 a2 2c 4a 2f 4c 80, SEL_RES 00
pub fn activation_ntag() -> Vec<u8> {
    bytes("61 05 17 01 01 02 00 ff 01 0c 44 00 07 04 a2 2c 4a 2f 4c 80 01 00 00 00 00 00")
}

pub fn ntag_nfcid() -> [u8; 7] {
    [0x04, 0xa2, 0x2c, 0x4a, 0x2f, 0x4c, 0x80]
}

/// Mifare Classic 1K activation: NFCID de ad be ef, SEL_RES 08|10
pub fn activation_mifare() -> Vec<u8> {
    bytes("61 05 14 01 01 02 00 ff 01 09 04 00 04 de ad be ef 01 18 00 00 00 00")
}

/// Poll-F activation; tech params stay raw
pub fn activation_felica() -> Vec<u8> {
    bytes("61 05 0f 02 01 03 02 ff 01 04 01 02 03 04 02 00 00 00")
}

/// Type-2 READ reply on the static connection: 16 bytes of memory then 00
pub fn read_reply(block: u8) -> Vec<u8> {
    let mut data: Vec<u8> = (0..16u8).map(|i| block.wrapping_mul(4).wrapping_add(i)).collect();
    data.push(0x00);
    let mut frame = vec![0x00, 0x00, data.len() as u8];
    frame.extend_from_slice(&data);
    frame
}

pub fn activation_record(frame: &[u8]) -> ActivationRecord {
    libnci::protocol::decode_rf_intf_activated_ntf(&frame[3..]).expect("activation fixture")
}

pub fn status_rsp(gid_byte: u8, oid: u8, status: Status) -> Vec<u8> {
    vec![gid_byte, oid, 0x01, status.as_u8()]
}
