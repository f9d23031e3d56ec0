// libnci/src/controller/event.rs

use crate::Result;
use crate::types::{ActivationRecord, DeactivationRecord, ResetInfo};

/// One decoded inbound packet.
///
/// Message-level outcomes (wrong state, bad length, non-OK status) travel
/// inside the variant so the layer above can route them to whichever
/// sequence was waiting for that message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NciEvent {
    CoreReset(Result<ResetInfo>),
    CoreInit(Result<()>),
    /// CORE_CONN_CREDITS_NTF; credits are not tracked.
    ConnCredits,
    RfDiscoverMap(Result<()>),
    RfDiscover(Result<()>),
    RfIntfActivated(Result<ActivationRecord>),
    RfDeactivate(Result<()>),
    RfDeactivateNtf(Result<DeactivationRecord>),
    Data { cid: u8, payload: Vec<u8> },
}

impl NciEvent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CoreReset(_) => "CORE_RESET_RSP",
            Self::CoreInit(_) => "CORE_INIT_RSP",
            Self::ConnCredits => "CORE_CONN_CREDITS_NTF",
            Self::RfDiscoverMap(_) => "RF_DISCOVER_MAP_RSP",
            Self::RfDiscover(_) => "RF_DISCOVER_RSP",
            Self::RfIntfActivated(_) => "RF_INTF_ACTIVATED_NTF",
            Self::RfDeactivate(_) => "RF_DEACTIVATE_RSP",
            Self::RfDeactivateNtf(_) => "RF_DEACTIVATE_NTF",
            Self::Data { .. } => "DATA",
        }
    }
}
