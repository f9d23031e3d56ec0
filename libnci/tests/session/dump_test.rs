#[path = "../common/mod.rs"]
mod common;

use libnci::tags::SessionState;
use libnci::test_support::{self, Recorded};
use libnci::TagError;

fn activated() -> (
    libnci::tags::TagSession<test_support::RecordingCallback>,
    test_support::SharedTransport,
) {
    common::init_logger();
    let (mut session, shared) = test_support::mock_session();
    test_support::drive_to_activated(
        &mut session,
        &shared,
        &common::fixtures::ntag_nfcid(),
        Some(0x00),
    )
    .unwrap();
    (session, shared)
}

#[test]
fn dump_sixteen_blocks_in_four_chunks() {
    let (mut session, shared) = activated();

    session.dump().unwrap();
    assert_eq!(session.state(), SessionState::DumpRsp);
    for i in 0..4u8 {
        assert_eq!(
            shared.sent().last().unwrap(),
            &vec![0x00, 0x00, 0x02, 0x30, i * 4]
        );
        shared.push_frame(common::fixtures::read_reply(i * 4));
        session.process_next_event().unwrap();
        assert_eq!(session.state(), SessionState::Dump);
        if i < 3 {
            session.continue_dump().unwrap();
        }
    }

    let chunks = session.callback().dumped();
    assert_eq!(chunks.len(), 4);
    assert!(chunks.iter().all(|(data, _)| data.len() == 16));
    let mores: Vec<bool> = chunks.iter().map(|(_, more)| *more).collect();
    assert_eq!(mores, vec![true, true, true, false]);
    assert_eq!(chunks[1].0[0], 16);

    let before = shared.sent().len();
    assert_eq!(session.continue_dump(), Err(TagError::Rejected));
    assert_eq!(shared.sent().len(), before);
}

#[test]
fn malformed_reply_reports_failed() {
    let (mut session, shared) = activated();
    session.dump().unwrap();

    let mut reply = common::fixtures::read_reply(0);
    let last = reply.len() - 1;
    reply[last] = 0x01;
    shared.push_frame(reply);
    session.process_next_event().unwrap();

    assert_eq!(
        session.callback().events.last().unwrap(),
        &Recorded::Dump(Err(TagError::Failed))
    );
    assert_eq!(session.continue_dump(), Err(TagError::Rejected));
}

#[test]
fn dump_send_failure_stays_in_dump() {
    let (mut session, shared) = activated();
    shared.set_write_failures(1);
    assert_eq!(session.dump(), Err(TagError::Failed));
    assert_eq!(session.state(), SessionState::Dump);
    // the tag still expects to send block 0
    session.continue_dump().unwrap();
    assert_eq!(shared.sent().last().unwrap(), &vec![0x00, 0x00, 0x02, 0x30, 0x00]);
}

#[test]
fn control_message_during_dump_is_failure() {
    let (mut session, shared) = activated();
    session.dump().unwrap();
    shared.push_frame(common::fixtures::discover_rsp_ok());
    session.process_next_event().unwrap();
    assert_eq!(
        session.callback().events.last().unwrap(),
        &Recorded::Dump(Err(TagError::Failed))
    );
    assert_eq!(session.state(), SessionState::DumpRsp);
}
