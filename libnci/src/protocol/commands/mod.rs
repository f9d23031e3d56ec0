// libnci/src/protocol/commands/mod.rs

pub mod core;
pub mod rf;

pub use self::core::{encode_core_init, encode_core_reset};
pub use self::rf::{encode_rf_deactivate, encode_rf_discover, encode_rf_discover_map};

use crate::constants::{
    NCI_GID_CORE, NCI_GID_RF_MANAGE, NCI_MSG_CORE_INIT, NCI_MSG_CORE_RESET, NCI_MSG_RF_DEACTIVATE,
    NCI_MSG_RF_DISCOVER, NCI_MSG_RF_DISCOVER_MAP,
};
use crate::protocol::frame::{Frame, MessageType};
use crate::types::{DeactivateType, DiscoverConfig, DiscoverMap, ResetType};
use crate::Result;

/// Control commands the host sends to the controller. New commands should
/// be added here and their payload encoder placed in
/// `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CoreReset { reset_type: ResetType },
    CoreInit,
    RfDiscoverMap { maps: Vec<DiscoverMap> },
    RfDiscover { configs: Vec<DiscoverConfig> },
    RfDeactivate { deactivate_type: DeactivateType },
}

impl Command {
    pub fn gid(&self) -> u8 {
        match self {
            Self::CoreReset { .. } | Self::CoreInit => NCI_GID_CORE,
            Self::RfDiscoverMap { .. } | Self::RfDiscover { .. } | Self::RfDeactivate { .. } => {
                NCI_GID_RF_MANAGE
            }
        }
    }

    pub fn oid(&self) -> u8 {
        match self {
            Self::CoreReset { .. } => NCI_MSG_CORE_RESET,
            Self::CoreInit => NCI_MSG_CORE_INIT,
            Self::RfDiscoverMap { .. } => NCI_MSG_RF_DISCOVER_MAP,
            Self::RfDiscover { .. } => NCI_MSG_RF_DISCOVER,
            Self::RfDeactivate { .. } => NCI_MSG_RF_DEACTIVATE,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CoreReset { .. } => "CORE_RESET",
            Self::CoreInit => "CORE_INIT",
            Self::RfDiscoverMap { .. } => "RF_DISCOVER_MAP",
            Self::RfDiscover { .. } => "RF_DISCOVER",
            Self::RfDeactivate { .. } => "RF_DEACTIVATE",
        }
    }

    /// Encode the command parameters (packet payload, header excluded).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::CoreReset { reset_type } => Ok(encode_core_reset(*reset_type)),
            Self::CoreInit => Ok(encode_core_init()),
            Self::RfDiscoverMap { maps } => encode_rf_discover_map(maps),
            Self::RfDiscover { configs } => encode_rf_discover(configs),
            Self::RfDeactivate { deactivate_type } => Ok(encode_rf_deactivate(*deactivate_type)),
        }
    }

    pub fn to_frame(&self) -> Result<Frame> {
        let payload = self.encode()?;
        Frame::control(MessageType::Command, self.gid(), self.oid(), &payload)
    }
}
