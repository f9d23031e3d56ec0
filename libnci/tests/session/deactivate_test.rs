#[path = "../common/mod.rs"]
mod common;

use libnci::controller::ControllerState;
use libnci::tags::{CommandFamily, SessionState};
use libnci::test_support::{self, Recorded};
use libnci::types::{DeactivationReason, DeactivationRecord};
use libnci::{Status, TagError};

#[test]
fn deactivate_returns_to_discovery() -> anyhow::Result<()> {
    common::init_logger();
    let (mut session, shared) = test_support::mock_session();
    test_support::drive_to_activated(&mut session, &shared, &common::fixtures::ntag_nfcid(), None)?;

    shared.push_frame(common::fixtures::deactivate_rsp_ok());
    shared.push_frame(common::fixtures::deactivate_ntf_discovery());
    session.deactivate()?;
    assert!(session.tag().is_none());
    assert_eq!(shared.sent().last().unwrap(), &vec![0x21, 0x06, 0x01, 0x03]);

    session.process_next_event()?;
    assert_eq!(session.state(), SessionState::DeactivateRsp);
    session.process_next_event()?;
    assert_eq!(session.state(), SessionState::DiscoverNtf);
    assert_eq!(session.family(), CommandFamily::Discover);
    assert_eq!(session.nci().state(), ControllerState::Discovery);
    assert_eq!(
        session.callback().events.last().unwrap(),
        &Recorded::Deactivated(Ok(DeactivationRecord {
            deactivate_type: 0x03,
            reason: DeactivationReason::DhRequest,
        }))
    );

    // the next endpoint is picked up without another discover()
    shared.push_frame(common::fixtures::activation_mifare());
    session.process_next_event()?;
    assert_eq!(session.state(), SessionState::DiscoverActivated);
    Ok(())
}

#[test]
fn deactivate_between_dump_chunks() -> anyhow::Result<()> {
    let (mut session, shared) = test_support::mock_session();
    test_support::drive_to_activated(&mut session, &shared, &common::fixtures::ntag_nfcid(), None)?;
    session.dump()?;
    // waiting for a reply: not yet
    assert_eq!(session.deactivate(), Err(TagError::Rejected));
    shared.push_frame(common::fixtures::read_reply(0));
    session.process_next_event()?;
    session.deactivate()?;
    assert_eq!(session.state(), SessionState::Deactivate);
    Ok(())
}

#[test]
fn deactivate_failure_reported() -> anyhow::Result<()> {
    let (mut session, shared) = test_support::mock_session();
    test_support::drive_to_activated(&mut session, &shared, &common::fixtures::ntag_nfcid(), None)?;
    shared.push_frame(common::fixtures::status_rsp(0x41, 0x06, Status::SemanticError));
    session.deactivate()?;
    session.process_next_event()?;
    assert_eq!(session.state(), SessionState::Deactivate);
    assert_eq!(
        session.callback().events.last().unwrap(),
        &Recorded::Deactivated(Err(TagError::Failed))
    );
    Ok(())
}
