#[path = "../common/mod.rs"]
mod common;

use libnci::protocol::{Frame, Header, MessageType};
use libnci::{Error, Status};

#[test]
fn activation_fixture_decodes_as_one_packet() {
    let raw = common::fixtures::activation_ntag();
    let frame = Frame::decode(&raw).expect("frame decode");
    assert_eq!(frame.header.mt, MessageType::Notification);
    assert_eq!(frame.header.gid, 0x01);
    assert_eq!(frame.header.oid, 0x05);
    assert_eq!(frame.payload.len(), frame.header.payload_len());
    assert_eq!(frame.wire_len(), raw.len());
}

#[test]
fn trailing_bytes_are_a_length_error() {
    let mut raw = common::fixtures::discover_rsp_ok();
    raw.push(0x00);
    let err = Frame::decode(&raw).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidLength {
            expected: 4,
            actual: 5
        }
    );
    assert_eq!(err.status(), Status::SyntaxError);
}

#[test]
fn segmented_packet_rejected_for_any_group() {
    for b0 in [0x50u8, 0x51, 0x52, 0x5f, 0x70, 0x71] {
        let raw = [b0, 0x00, 0x01, 0x00];
        let header = Header::decode(&raw).unwrap();
        assert!(header.is_segmented());
        let err = Frame::decode(&raw).unwrap_err();
        assert_eq!(err.status(), Status::SyntaxError, "b0 {:#04x}", b0);
    }
}

#[test]
fn data_packet_addresses_connection() {
    let frame = Frame::data(3, &[0x30, 0x00]).unwrap();
    assert_eq!(frame.encode(), vec![0x03, 0x00, 0x02, 0x30, 0x00]);
    assert_eq!(Header::decode(&frame.encode()).unwrap().cid(), 3);
}
