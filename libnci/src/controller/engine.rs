// libnci/src/controller/engine.rs

use crate::constants::NCI_HEADER_LEN;
use crate::controller::event::NciEvent;
use crate::controller::state::ControllerState;
use crate::protocol::codec::{self, MessageKind};
use crate::protocol::frame::Header;
use crate::protocol::{Command, responses};
use crate::transport::Transport;
use crate::types::{
    ActivationRecord, DeactivateType, DeactivationRecord, DiscoverConfig, DiscoverMap, InitInfo,
    ResetInfo, ResetType,
};
use crate::utils::log_buffer;
use crate::{Error, Result};

/// NCI engine bound to one controller.
///
/// Commands check the controller state first (`Error::Rejected`, nothing
/// written), then their parameters (`Error::InvalidParam`). At most one
/// command is expected to be outstanding; the engine does not queue.
pub struct Nci {
    transport: Box<dyn Transport>,
    state: ControllerState,
    reset_info: Option<ResetInfo>,
    init_info: Option<InitInfo>,
    activation: Option<ActivationRecord>,
    deactivation: Option<DeactivationRecord>,
}

impl Nci {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            state: ControllerState::None,
            reset_info: None,
            init_info: None,
            activation: None,
            deactivation: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Version and configuration status from the last CORE_RESET_RSP.
    pub fn reset_info(&self) -> Option<&ResetInfo> {
        self.reset_info.as_ref()
    }

    /// Capabilities from the last CORE_INIT_RSP, when they could be decoded.
    pub fn init_info(&self) -> Option<&InitInfo> {
        self.init_info.as_ref()
    }

    /// Last activated endpoint; overwritten by the next activation.
    pub fn activation(&self) -> Option<&ActivationRecord> {
        self.activation.as_ref()
    }

    pub fn deactivation(&self) -> Option<&DeactivationRecord> {
        self.deactivation.as_ref()
    }

    /// Reset the controller through the transport and forget everything
    /// learned from it. The engine is back in `ControllerState::None`.
    pub fn hard_reset(&mut self) -> Result<()> {
        log::debug!("NCI: hard reset from {}", self.state);
        self.transport.reset()?;
        self.state = ControllerState::None;
        self.reset_info = None;
        self.init_info = None;
        self.activation = None;
        self.deactivation = None;
        Ok(())
    }

    /// CORE_RESET_CMD; allowed in `None` only.
    pub fn reset_controller(&mut self, reset_type: ResetType) -> Result<()> {
        self.require(ControllerState::None, "CORE_RESET_CMD")?;
        self.send_command(&Command::CoreReset { reset_type })
    }

    /// CORE_INIT_CMD; allowed in `Reset` only.
    pub fn init_controller(&mut self) -> Result<()> {
        self.require(ControllerState::Reset, "CORE_INIT_CMD")?;
        self.send_command(&Command::CoreInit)
    }

    /// RF_DISCOVER_MAP_CMD; allowed in `Idle` only. Entries are sent in
    /// the given order.
    pub fn configure_discovery_map(&mut self, maps: &[DiscoverMap]) -> Result<()> {
        self.require(ControllerState::Idle, "RF_DISCOVER_MAP_CMD")?;
        self.send_command(&Command::RfDiscoverMap {
            maps: maps.to_vec(),
        })
    }

    /// RF_DISCOVER_CMD; allowed in `Idle` only. The state moves to
    /// `Discovery` when the response arrives, not here.
    pub fn start_discovery(&mut self, configs: &[DiscoverConfig]) -> Result<()> {
        self.require(ControllerState::Idle, "RF_DISCOVER_CMD")?;
        self.send_command(&Command::RfDiscover {
            configs: configs.to_vec(),
        })
    }

    /// RF_DEACTIVATE_CMD; allowed in `PollActive` only.
    pub fn deactivate(&mut self, deactivate_type: DeactivateType) -> Result<()> {
        self.require(ControllerState::PollActive, "RF_DEACTIVATE_CMD")?;
        self.send_command(&Command::RfDeactivate { deactivate_type })
    }

    /// Send a DATA packet on connection `cid`; allowed in `PollActive` only.
    pub fn send_data(&mut self, cid: u8, data: &[u8]) -> Result<()> {
        self.require(ControllerState::PollActive, "DATA")?;
        let bytes = codec::encode_data_frame(cid, data)?;
        log::debug!("NCI_DATA: conn {} len {}", cid, data.len());
        self.write_frame(&bytes)
    }

    /// Block until the controller has a packet, read and decode it.
    ///
    /// `Err` is returned for packet-level failures: transport errors, an
    /// empty or short read, segmented packets, unknown groups or opcodes and
    /// commands sent by the controller. Failures specific to a recognised
    /// message are carried inside the returned event.
    pub fn process_next_event(&mut self) -> Result<NciEvent> {
        let (header, payload) = match self.read_packet() {
            Ok(packet) => packet,
            Err(e) => {
                log::error!("NCI error: {}", e);
                return Err(e);
            }
        };
        if header.is_segmented() {
            log::error!("NCI error: segmented packets are not supported");
            return Err(Error::SyntaxError("segmented packet".into()));
        }
        let kind = codec::identify(&header).inspect_err(|e| {
            log::error!("NCI error: {}", e);
        })?;
        Ok(self.dispatch(kind, payload))
    }

    fn dispatch(&mut self, kind: MessageKind, payload: Vec<u8>) -> NciEvent {
        log::debug!("NCI_EVT: {}", kind.name());
        let event = match kind {
            MessageKind::Data { cid } => NciEvent::Data { cid, payload },
            MessageKind::CoreConnCreditsNtf => NciEvent::ConnCredits,
            MessageKind::CoreResetRsp => NciEvent::CoreReset(self.on_core_reset_rsp(&payload)),
            MessageKind::CoreInitRsp => NciEvent::CoreInit(self.on_core_init_rsp(&payload)),
            MessageKind::RfDiscoverMapRsp => {
                NciEvent::RfDiscoverMap(self.on_rf_discover_map_rsp(&payload))
            }
            MessageKind::RfDiscoverRsp => NciEvent::RfDiscover(self.on_rf_discover_rsp(&payload)),
            MessageKind::RfIntfActivatedNtf => {
                NciEvent::RfIntfActivated(self.on_rf_intf_activated_ntf(&payload))
            }
            MessageKind::RfDeactivateRsp => {
                NciEvent::RfDeactivate(self.on_rf_deactivate_rsp(&payload))
            }
            MessageKind::RfDeactivateNtf => {
                NciEvent::RfDeactivateNtf(self.on_rf_deactivate_ntf(&payload))
            }
        };
        if let Some(e) = event_error(&event) {
            log::error!("NCI error: {} {} in {}", event.name(), e, self.state);
        }
        event
    }

    fn on_core_reset_rsp(&mut self, payload: &[u8]) -> Result<ResetInfo> {
        self.require(ControllerState::None, "CORE_RESET_RSP")?;
        let info = responses::decode_core_reset_rsp(payload)?;
        log::info!(
            "NCI: controller reset, NCI {}.{}",
            info.version_major(),
            info.version_minor()
        );
        self.reset_info = Some(info);
        self.set_state(ControllerState::Reset);
        Ok(info)
    }

    fn on_core_init_rsp(&mut self, payload: &[u8]) -> Result<()> {
        self.require(ControllerState::Reset, "CORE_INIT_RSP")?;
        let info = responses::decode_core_init_rsp(payload)?;
        #[cfg(feature = "diagnostics")]
        log::trace!("NCI: init details {:?}", info);
        self.init_info = info;
        self.set_state(ControllerState::Idle);
        Ok(())
    }

    fn on_rf_discover_map_rsp(&mut self, payload: &[u8]) -> Result<()> {
        self.require(ControllerState::Idle, "RF_DISCOVER_MAP_RSP")?;
        responses::decode_rf_discover_map_rsp(payload)
    }

    fn on_rf_discover_rsp(&mut self, payload: &[u8]) -> Result<()> {
        self.require(ControllerState::Idle, "RF_DISCOVER_RSP")?;
        responses::decode_rf_discover_rsp(payload)?;
        self.set_state(ControllerState::Discovery);
        Ok(())
    }

    fn on_rf_intf_activated_ntf(&mut self, payload: &[u8]) -> Result<ActivationRecord> {
        self.require(ControllerState::Discovery, "RF_INTF_ACTIVATED_NTF")?;
        let record = responses::decode_rf_intf_activated_ntf(payload)?;
        #[cfg(feature = "diagnostics")]
        log::trace!("NCI: activation {:?}", record);
        self.activation = Some(record.clone());
        self.set_state(ControllerState::PollActive);
        Ok(record)
    }

    fn on_rf_deactivate_rsp(&mut self, payload: &[u8]) -> Result<()> {
        self.require(ControllerState::PollActive, "RF_DEACTIVATE_RSP")?;
        responses::decode_rf_deactivate_rsp(payload)?;
        self.set_state(ControllerState::Discovery);
        Ok(())
    }

    fn on_rf_deactivate_ntf(&mut self, payload: &[u8]) -> Result<DeactivationRecord> {
        self.require(ControllerState::Discovery, "RF_DEACTIVATE_NTF")?;
        let record = responses::decode_rf_deactivate_ntf(payload)?;
        self.deactivation = Some(record);
        Ok(record)
    }

    fn require(&self, expected: ControllerState, what: &str) -> Result<()> {
        if self.state != expected {
            log::debug!("NCI: {} rejected in {}", what, self.state);
            return Err(Error::Rejected);
        }
        Ok(())
    }

    fn set_state(&mut self, next: ControllerState) {
        log::debug!("NCI: state {} -> {}", self.state, next);
        self.state = next;
    }

    fn send_command(&mut self, cmd: &Command) -> Result<()> {
        let bytes = codec::encode_command_frame(cmd)?;
        log::debug!("NCI_CMD: {}", cmd.name());
        self.write_frame(&bytes)
    }

    fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        log_buffer(log::Level::Trace, "NCI_TX: ", bytes);
        let written = self.transport.write(bytes)?;
        if written != bytes.len() {
            return Err(Error::ShortWrite {
                expected: bytes.len(),
                actual: written,
            });
        }
        Ok(())
    }

    // The payload is always drained before the header is validated so a
    // bad packet does not desynchronise the stream.
    fn read_packet(&mut self) -> Result<(Header, Vec<u8>)> {
        self.transport.wait_until_ready()?;

        let mut hdr = [0u8; NCI_HEADER_LEN];
        let n = self.transport.read(&mut hdr)?;
        if n == 0 {
            return Err(Error::NoHeader);
        }
        if n != NCI_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: NCI_HEADER_LEN,
                actual: n,
            });
        }

        let len = hdr[2] as usize;
        let mut payload = vec![0u8; len];
        if len > 0 {
            let n = self.transport.read(&mut payload)?;
            if n == 0 {
                return Err(Error::NoPayload);
            }
            if n != len {
                return Err(Error::InvalidLength {
                    expected: len,
                    actual: n,
                });
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            let mut raw = hdr.to_vec();
            raw.extend_from_slice(&payload);
            log_buffer(log::Level::Trace, "NCI_RX: ", &raw);
        }

        let header = Header::decode(&hdr)?;
        Ok((header, payload))
    }
}

fn event_error(event: &NciEvent) -> Option<&Error> {
    match event {
        NciEvent::CoreReset(Err(e))
        | NciEvent::CoreInit(Err(e))
        | NciEvent::RfDiscoverMap(Err(e))
        | NciEvent::RfDiscover(Err(e))
        | NciEvent::RfIntfActivated(Err(e))
        | NciEvent::RfDeactivate(Err(e))
        | NciEvent::RfDeactivateNtf(Err(e)) => Some(e),
        _ => None,
    }
}
