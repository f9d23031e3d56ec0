#[path = "../common/mod.rs"]
mod common;

use libnci::transport::mock::MockTransport;
use libnci::transport::Transport;

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_frame(common::fixtures::reset_rsp_ok());
    assert_eq!(m.write(&[0x20, 0x00, 0x01, 0x00]).unwrap(), 4);
    assert_eq!(m.sent, vec![vec![0x20, 0x00, 0x01, 0x00]]);

    m.wait_until_ready().unwrap();
    let mut hdr = [0u8; 3];
    assert_eq!(m.read(&mut hdr).unwrap(), 3);
    let mut payload = vec![0u8; hdr[2] as usize];
    assert_eq!(m.read(&mut payload).unwrap(), 3);
    assert_eq!(payload, vec![0x00, 0x10, 0x00]);
    assert_eq!(m.pending(), 0);
}

#[test]
fn boxed_transport_drives_engine() {
    let mut m = MockTransport::new();
    m.push_frame(common::fixtures::reset_rsp_ok());
    let mut nci = libnci::controller::Nci::new(Box::new(m));
    nci.reset_controller(libnci::types::ResetType::KeepConfig)
        .unwrap();
    let event = nci.process_next_event().unwrap();
    assert_eq!(event.name(), "CORE_RESET_RSP");
}
