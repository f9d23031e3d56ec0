// libnci/src/protocol/codec.rs

use crate::constants::{
    NCI_GID_CORE, NCI_GID_RF_MANAGE, NCI_MSG_CORE_CONN_CREDITS, NCI_MSG_CORE_INIT,
    NCI_MSG_CORE_RESET, NCI_MSG_RF_DEACTIVATE, NCI_MSG_RF_DISCOVER, NCI_MSG_RF_DISCOVER_MAP,
    NCI_MSG_RF_INTF_ACTIVATED,
};
use crate::{Error, Result};

use super::commands::Command;
use super::frame::{Frame, Header, MessageType};

/// Inbound packets the host understands, identified from the header alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Data { cid: u8 },
    CoreResetRsp,
    CoreInitRsp,
    CoreConnCreditsNtf,
    RfDiscoverMapRsp,
    RfDiscoverRsp,
    RfDeactivateRsp,
    RfIntfActivatedNtf,
    RfDeactivateNtf,
}

impl MessageKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Data { .. } => "DATA",
            Self::CoreResetRsp => "CORE_RESET_RSP",
            Self::CoreInitRsp => "CORE_INIT_RSP",
            Self::CoreConnCreditsNtf => "CORE_CONN_CREDITS_NTF",
            Self::RfDiscoverMapRsp => "RF_DISCOVER_MAP_RSP",
            Self::RfDiscoverRsp => "RF_DISCOVER_RSP",
            Self::RfDeactivateRsp => "RF_DEACTIVATE_RSP",
            Self::RfIntfActivatedNtf => "RF_INTF_ACTIVATED_NTF",
            Self::RfDeactivateNtf => "RF_DEACTIVATE_NTF",
        }
    }
}

/// Route an inbound header: data first, then group, then message type,
/// then opcode.
pub fn identify(header: &Header) -> Result<MessageKind> {
    if header.mt == MessageType::Data {
        return Ok(MessageKind::Data { cid: header.cid() });
    }
    match header.gid {
        NCI_GID_CORE => identify_core(header),
        NCI_GID_RF_MANAGE => identify_rf(header),
        gid => Err(Error::UnknownGid { gid }),
    }
}

fn identify_core(header: &Header) -> Result<MessageKind> {
    match (header.mt, header.oid) {
        (MessageType::Response, NCI_MSG_CORE_RESET) => Ok(MessageKind::CoreResetRsp),
        (MessageType::Response, NCI_MSG_CORE_INIT) => Ok(MessageKind::CoreInitRsp),
        (MessageType::Notification, NCI_MSG_CORE_CONN_CREDITS) => {
            Ok(MessageKind::CoreConnCreditsNtf)
        }
        (MessageType::Response | MessageType::Notification, oid) => Err(Error::UnknownOid {
            gid: header.gid,
            oid,
        }),
        (mt, _) => Err(unexpected_type(mt)),
    }
}

fn identify_rf(header: &Header) -> Result<MessageKind> {
    match (header.mt, header.oid) {
        (MessageType::Response, NCI_MSG_RF_DISCOVER_MAP) => Ok(MessageKind::RfDiscoverMapRsp),
        (MessageType::Response, NCI_MSG_RF_DISCOVER) => Ok(MessageKind::RfDiscoverRsp),
        (MessageType::Response, NCI_MSG_RF_DEACTIVATE) => Ok(MessageKind::RfDeactivateRsp),
        (MessageType::Notification, NCI_MSG_RF_INTF_ACTIVATED) => {
            Ok(MessageKind::RfIntfActivatedNtf)
        }
        (MessageType::Notification, NCI_MSG_RF_DEACTIVATE) => Ok(MessageKind::RfDeactivateNtf),
        (MessageType::Response | MessageType::Notification, oid) => Err(Error::UnknownOid {
            gid: header.gid,
            oid,
        }),
        (mt, _) => Err(unexpected_type(mt)),
    }
}

fn unexpected_type(mt: MessageType) -> Error {
    Error::SyntaxError(format!("unexpected {} from controller", mt))
}

/// Encode a Command into a full wire packet.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Ok(cmd.to_frame()?.encode())
}

/// Encode a DATA packet for connection `cid`.
pub fn encode_data_frame(cid: u8, payload: &[u8]) -> Result<Vec<u8>> {
    Ok(Frame::data(cid, payload)?.encode())
}
