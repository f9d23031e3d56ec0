use libnci::controller::{ControllerState, Nci};
use libnci::test_support::SharedTransport;
use libnci::types::ResetType;
use libnci::{Error, Status};

#[test]
fn write_failure_and_recovery() {
    let shared = SharedTransport::default();
    let mut nci = Nci::new(Box::new(shared.clone()));
    shared.set_write_failures(1);

    // First write fails (simulated), state untouched
    let err = nci.reset_controller(ResetType::KeepConfig).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), Status::Failed);
    assert_eq!(nci.state(), ControllerState::None);

    // Second attempt goes through
    nci.reset_controller(ResetType::KeepConfig).unwrap();
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn empty_reads_fail_distinctly() {
    let shared = SharedTransport::default();
    let mut nci = Nci::new(Box::new(shared.clone()));

    // header promised a payload that never comes
    shared.push_frame(vec![0x41, 0x03, 0x01]);
    assert_eq!(nci.process_next_event(), Err(Error::NoPayload));

    assert_eq!(nci.process_next_event(), Err(Error::Timeout));
}

#[test]
fn short_write_counts_as_failure() {
    let shared = SharedTransport::default();
    let mut nci = Nci::new(Box::new(shared.clone()));
    shared.set_short_writes(1);
    assert_eq!(
        nci.reset_controller(ResetType::KeepConfig),
        Err(Error::ShortWrite {
            expected: 4,
            actual: 3
        })
    );
}
