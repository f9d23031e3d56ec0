#[path = "../common/mod.rs"]
mod common;

use libnci::controller::ControllerState;
use libnci::tags::{SessionState, TagSessionBuilder, TagType};
use libnci::test_support::{Recorded, RecordingCallback, SharedTransport};
use libnci::types::ResetType;

#[test]
fn reset_then_discover_finds_type2() -> anyhow::Result<()> {
    common::init_logger();
    let shared = SharedTransport::default();
    let mut session = TagSessionBuilder::new(RecordingCallback::default())
        .with_transport(Box::new(shared.clone()))
        .build()?;

    shared.push_frame(common::fixtures::reset_rsp_ok());
    shared.push_frame(common::fixtures::init_rsp_pn7120());
    session.reset(ResetType::KeepConfig)?;
    session.process_next_event()?;
    session.process_next_event()?;
    assert_eq!(session.state(), SessionState::InitDone);
    assert_eq!(session.nci().state(), ControllerState::Idle);
    assert_eq!(session.nci().init_info().unwrap().max_logical_connections, 1);

    shared.push_frame(common::fixtures::discover_map_rsp_ok());
    shared.push_frame(common::fixtures::discover_rsp_ok());
    shared.push_frame(common::fixtures::activation_ntag());
    session.discover()?;
    for _ in 0..3 {
        session.process_next_event()?;
    }

    assert_eq!(session.state(), SessionState::DiscoverActivated);
    assert_eq!(session.nci().state(), ControllerState::PollActive);
    let tag = session.tag().expect("classified tag");
    assert_eq!(tag.tag_type(), TagType::Type2);
    assert_eq!(tag.nfcid().unwrap().as_bytes(), &common::fixtures::ntag_nfcid());
    assert_eq!(
        session.callback().events,
        vec![
            Recorded::Reset(Ok(())),
            Recorded::Discover(Ok(())),
            Recorded::Detected(Ok(Some(TagType::Type2))),
        ]
    );

    // CORE_RESET, CORE_INIT, RF_DISCOVER_MAP, RF_DISCOVER
    let sent = shared.sent();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0], vec![0x20, 0x00, 0x01, 0x00]);
    assert_eq!(&sent[3][..2], &[0x21, 0x03]);
    Ok(())
}

#[test]
fn mifare_and_unknown_endpoints() -> anyhow::Result<()> {
    common::init_logger();
    for (frame, expected) in [
        (common::fixtures::activation_mifare(), Some(TagType::Mifare)),
        (common::fixtures::activation_felica(), None),
    ] {
        let (mut session, shared) = libnci::test_support::mock_session();
        libnci::test_support::drive_to_init_done(&mut session, &shared)?;
        shared.push_frame(common::fixtures::discover_map_rsp_ok());
        shared.push_frame(common::fixtures::discover_rsp_ok());
        shared.push_frame(frame);
        session.discover()?;
        for _ in 0..3 {
            session.process_next_event()?;
        }
        assert_eq!(session.state(), SessionState::DiscoverActivated);
        assert_eq!(
            session.callback().events.last().unwrap(),
            &Recorded::Detected(Ok(expected))
        );
        assert_eq!(session.tag().map(|t| t.tag_type()), expected);
    }
    Ok(())
}

#[test]
fn reset_is_accepted_from_any_state() -> anyhow::Result<()> {
    let (mut session, shared) = libnci::test_support::mock_session();
    libnci::test_support::drive_to_activated(
        &mut session,
        &shared,
        &common::fixtures::ntag_nfcid(),
        Some(0x00),
    )?;
    assert!(session.tag().is_some());

    session.reset(ResetType::ResetConfig)?;
    assert_eq!(session.state(), SessionState::InitReset);
    assert!(session.tag().is_none());
    assert_eq!(session.nci().state(), ControllerState::None);
    assert_eq!(shared.resets(), 2);
    assert_eq!(shared.sent(), vec![vec![0x20, 0x00, 0x01, 0x01]]);
    Ok(())
}

#[test]
fn conn_credits_are_ignored() -> anyhow::Result<()> {
    let (mut session, shared) = libnci::test_support::mock_session();
    shared.push_frame(common::fixtures::reset_rsp_ok());
    shared.push_frame(libnci::test_support::conn_credits_ntf());
    shared.push_frame(common::fixtures::init_rsp_pn7120());
    session.reset(ResetType::KeepConfig)?;
    for _ in 0..3 {
        session.process_next_event()?;
    }
    assert_eq!(session.state(), SessionState::InitDone);
    assert_eq!(session.callback().events, vec![Recorded::Reset(Ok(()))]);
    Ok(())
}
