#[path = "../common/mod.rs"]
mod common;

use libnci::protocol::{
    decode_core_init_rsp, decode_core_reset_rsp, decode_rf_deactivate_ntf,
    decode_rf_intf_activated_ntf,
};
use libnci::types::{ConfigStatus, DeactivateType, DeactivationReason, RfInterface, TechParams};
use libnci::{Error, Status};

#[test]
fn reset_rsp_fixture() {
    let raw = common::fixtures::reset_rsp_ok();
    let info = decode_core_reset_rsp(&raw[3..]).unwrap();
    assert_eq!((info.version_major(), info.version_minor()), (1, 0));
    assert_eq!(info.config_status, ConfigStatus::Kept);
}

#[test]
fn init_rsp_fixture_details() {
    let raw = common::fixtures::init_rsp_pn7120();
    let info = decode_core_init_rsp(&raw[3..]).unwrap().expect("details");
    assert_eq!(info.interfaces, vec![RfInterface::FRAME, RfInterface::ISO_DEP]);
    assert_eq!(info.max_logical_connections, 1);
    assert_eq!(info.max_routing_table_size, 0x0100);
    assert_eq!(info.max_control_payload, 0xff);
    assert_eq!(info.max_large_params, 0x0400);
    assert_eq!(info.manufacturer_id, 0x04);
}

#[test]
fn init_rsp_failure_status() {
    let mut raw = common::fixtures::init_rsp_pn7120();
    raw[3] = Status::Failed.as_u8();
    assert_eq!(
        decode_core_init_rsp(&raw[3..]),
        Err(Error::Status(Status::Failed))
    );
    // too short wins over the status
    assert!(matches!(
        decode_core_init_rsp(&raw[3..10]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn activation_fixtures() {
    let ntag = common::fixtures::activation_record(&common::fixtures::activation_ntag());
    assert_eq!(ntag.nfcid().unwrap().as_bytes(), &common::fixtures::ntag_nfcid());
    assert_eq!(ntag.poll_a().unwrap().sel_res, Some(0x00));
    assert_eq!(ntag.poll_a().unwrap().sens_res, [0x44, 0x00]);

    let felica = common::fixtures::activation_record(&common::fixtures::activation_felica());
    assert_eq!(felica.tech_params, TechParams::Raw(vec![0x01, 0x02, 0x03, 0x04]));
    assert!(felica.nfcid().is_none());
}

#[test]
fn activation_bounds_checked() {
    let raw = common::fixtures::activation_ntag();
    // cut inside the trailing fields
    let err = decode_rf_intf_activated_ntf(&raw[3..raw.len() - 2]).unwrap_err();
    assert_eq!(err.status(), Status::SyntaxError);

    // NFCID length 11
    let mut bad = raw[3..].to_vec();
    bad[9] = 11;
    assert_eq!(
        decode_rf_intf_activated_ntf(&bad).unwrap_err().status(),
        Status::SyntaxError
    );
}

#[test]
fn deactivate_ntf_fixture() {
    let raw = common::fixtures::deactivate_ntf_discovery();
    let rec = decode_rf_deactivate_ntf(&raw[3..]).unwrap();
    assert_eq!(rec.kind(), Some(DeactivateType::Discovery));
    assert_eq!(rec.reason, DeactivationReason::DhRequest);
}
