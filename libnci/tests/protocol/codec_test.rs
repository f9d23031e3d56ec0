use libnci::protocol::codec::{MessageKind, encode_command_frame, identify};
use libnci::protocol::{Command, Frame, Header, MessageType};
use libnci::types::{DeactivateType, DiscoverConfig, RfTechMode};
use libnci::{Error, Status};
use proptest::prelude::*;

#[test]
fn identify_known_messages() {
    let cases: [(&[u8], MessageKind); 7] = [
        (&[0x40, 0x00, 0x03], MessageKind::CoreResetRsp),
        (&[0x40, 0x01, 0x11], MessageKind::CoreInitRsp),
        (&[0x60, 0x06, 0x03], MessageKind::CoreConnCreditsNtf),
        (&[0x41, 0x00, 0x01], MessageKind::RfDiscoverMapRsp),
        (&[0x41, 0x03, 0x01], MessageKind::RfDiscoverRsp),
        (&[0x61, 0x05, 0x0b], MessageKind::RfIntfActivatedNtf),
        (&[0x61, 0x06, 0x02], MessageKind::RfDeactivateNtf),
    ];
    for (raw, kind) in cases {
        assert_eq!(identify(&Header::decode(raw).unwrap()).unwrap(), kind);
    }
}

#[test]
fn identify_rejects_other_groups() {
    for gid in [0x02u8, 0x03, 0x0e, 0x0f] {
        let header = Header::control(MessageType::Notification, gid, 0x00, 0);
        assert_eq!(identify(&header), Err(Error::UnknownGid { gid }));
    }
    let header = Header::control(MessageType::Response, 0x00, 0x02, 0);
    assert_eq!(identify(&header).unwrap_err().status(), Status::UnknownOid);
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::CoreInit),
        (0u8..4).prop_map(|t| Command::RfDeactivate {
            deactivate_type: DeactivateType::try_from(t).unwrap()
        }),
        proptest::collection::vec((any::<u8>(), any::<u8>()), 1..=127).prop_map(|v| {
            Command::RfDiscover {
                configs: v
                    .into_iter()
                    .map(|(t, f)| DiscoverConfig::new(RfTechMode::new(t), f))
                    .collect(),
            }
        }),
    ]
}

proptest! {
    #[test]
    fn command_round_trip(cmd in any_command()) {
        let raw = encode_command_frame(&cmd).unwrap();
        prop_assert_eq!(raw[2] as usize, raw.len() - 3);
        let frame = Frame::decode(&raw).unwrap();
        prop_assert_eq!(frame.header.mt, MessageType::Command);
        prop_assert_eq!(frame.header.gid, cmd.gid());
        prop_assert_eq!(frame.header.oid, cmd.oid());
        prop_assert_eq!(frame.payload, cmd.encode().unwrap());
    }

    #[test]
    fn segmented_always_rejected(b0 in any::<u8>(), oid in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mt = (b0 >> 5) & 0x07;
        prop_assume!(mt <= 3);
        let mut raw = vec![b0 | 0x10, oid, payload.len() as u8];
        raw.extend_from_slice(&payload);
        prop_assert_eq!(Frame::decode(&raw).unwrap_err().status(), Status::SyntaxError);
    }
}
