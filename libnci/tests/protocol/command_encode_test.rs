use libnci::protocol::codec::encode_command_frame;
use libnci::protocol::Command;
use libnci::tags::SessionConfig;
use libnci::types::{
    DeactivateType, DiscoverConfig, DiscoverMap, InterfaceMode, ResetType, RfInterface,
    RfProtocol, RfTechMode,
};
use libnci::Error;

#[test]
fn core_commands_encode() {
    let reset = Command::CoreReset {
        reset_type: ResetType::ResetConfig,
    };
    assert_eq!(encode_command_frame(&reset).unwrap(), vec![0x20, 0x00, 0x01, 0x01]);
    assert_eq!(
        encode_command_frame(&Command::CoreInit).unwrap(),
        vec![0x20, 0x01, 0x00]
    );
}

#[test]
fn default_discovery_encodes_in_order() {
    let cfg = SessionConfig::default();
    let map = Command::RfDiscoverMap {
        maps: cfg.discover_maps.clone(),
    };
    assert_eq!(
        encode_command_frame(&map).unwrap(),
        vec![0x21, 0x00, 0x0a, 0x03, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01, 0x03, 0x01, 0x01]
    );

    let disc = Command::RfDiscover {
        configs: cfg.discover_configs.clone(),
    };
    assert_eq!(
        encode_command_frame(&disc).unwrap(),
        vec![0x21, 0x03, 0x05, 0x02, 0x00, 0x01, 0x02, 0x01]
    );
}

#[test]
fn deactivate_encodes_type() {
    let cmd = Command::RfDeactivate {
        deactivate_type: DeactivateType::Idle,
    };
    assert_eq!(encode_command_frame(&cmd).unwrap(), vec![0x21, 0x06, 0x01, 0x00]);
}

#[test]
fn list_limits() {
    let empty = Command::RfDiscover { configs: vec![] };
    assert!(matches!(empty.encode(), Err(Error::InvalidParam(_))));

    let map = DiscoverMap::new(RfProtocol::ISO_DEP, InterfaceMode::Poll, RfInterface::ISO_DEP);
    // 1 + 84 * 3 = 253 fits, 85 entries do not
    let fits = Command::RfDiscoverMap { maps: vec![map; 84] };
    assert_eq!(fits.to_frame().unwrap().payload.len(), 253);
    let too_many = Command::RfDiscoverMap { maps: vec![map; 85] };
    assert!(matches!(too_many.encode(), Err(Error::InvalidParam(_))));

    let conf = DiscoverConfig::new(RfTechMode::POLL_B, 1);
    assert!(Command::RfDiscover { configs: vec![conf; 127] }.encode().is_ok());
    assert!(Command::RfDiscover { configs: vec![conf; 128] }.encode().is_err());
}
