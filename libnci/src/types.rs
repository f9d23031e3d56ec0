// libnci/src/types.rs

use crate::Error;
use crate::constants::NFCID_MAX_LEN;
use derive_more::Display;
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// NCI status code carried in responses and used internally as the
/// fine-grained outcome of every engine operation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    #[display(fmt = "OK")]
    Ok,
    #[display(fmt = "REJECTED")]
    Rejected,
    #[display(fmt = "MESSAGE_CORRUPTED")]
    MessageCorrupted,
    #[display(fmt = "FAILED")]
    Failed,
    #[display(fmt = "NOT_INITIALIZED")]
    NotInitialized,
    #[display(fmt = "SYNTAX_ERROR")]
    SyntaxError,
    #[display(fmt = "SEMANTIC_ERROR")]
    SemanticError,
    #[display(fmt = "UNKNOWN_GID")]
    UnknownGid,
    #[display(fmt = "UNKNOWN_OID")]
    UnknownOid,
    #[display(fmt = "INVALID_PARAM")]
    InvalidParam,
    #[display(fmt = "MESSAGE_SIZE_EXCEEDED")]
    MessageSizeExceeded,
    #[display(fmt = "DISCOVERY_ALREADY_STARTED")]
    DiscoveryAlreadyStarted,
    #[display(fmt = "DISCOVERY_TARGET_ACTIVATION_FAILED")]
    DiscoveryTargetActivationFailed,
    #[display(fmt = "DISCOVERY_TEAR_DOWN")]
    DiscoveryTearDown,
    #[display(fmt = "RF_TRANSMISSION_ERROR")]
    RfTransmissionError,
    #[display(fmt = "RF_PROTOCOL_ERROR")]
    RfProtocolError,
    #[display(fmt = "RF_TIMEOUT_ERROR")]
    RfTimeoutError,
    #[display(fmt = "NFCEE_INTERFACE_ACTIVATION_FAILED")]
    NfceeInterfaceActivationFailed,
    #[display(fmt = "NFCEE_TRANSMISSION_ERROR")]
    NfceeTransmissionError,
    #[display(fmt = "NFCEE_PROTOCOL_ERROR")]
    NfceeProtocolError,
    #[display(fmt = "NFCEE_TIMEOUT_ERROR")]
    NfceeTimeoutError,
    #[display(fmt = "BUFFER_FULL")]
    BufferFull,
    /// RFU or proprietary code
    #[display(fmt = "STATUS({:#04x})", _0)]
    Other(u8),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Ok => 0x00,
            Self::Rejected => 0x01,
            Self::MessageCorrupted => 0x02,
            Self::Failed => 0x03,
            Self::NotInitialized => 0x04,
            Self::SyntaxError => 0x05,
            Self::SemanticError => 0x06,
            Self::UnknownGid => 0x07,
            Self::UnknownOid => 0x08,
            Self::InvalidParam => 0x09,
            Self::MessageSizeExceeded => 0x0A,
            Self::DiscoveryAlreadyStarted => 0xA0,
            Self::DiscoveryTargetActivationFailed => 0xA1,
            Self::DiscoveryTearDown => 0xA2,
            Self::RfTransmissionError => 0xB0,
            Self::RfProtocolError => 0xB1,
            Self::RfTimeoutError => 0xB2,
            Self::NfceeInterfaceActivationFailed => 0xC0,
            Self::NfceeTransmissionError => 0xC1,
            Self::NfceeProtocolError => 0xC2,
            Self::NfceeTimeoutError => 0xC3,
            Self::BufferFull => 0xE0,
            Self::Other(v) => *v,
        }
    }
}

impl From<u8> for Status {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::Ok,
            0x01 => Self::Rejected,
            0x02 => Self::MessageCorrupted,
            0x03 => Self::Failed,
            0x04 => Self::NotInitialized,
            0x05 => Self::SyntaxError,
            0x06 => Self::SemanticError,
            0x07 => Self::UnknownGid,
            0x08 => Self::UnknownOid,
            0x09 => Self::InvalidParam,
            0x0A => Self::MessageSizeExceeded,
            0xA0 => Self::DiscoveryAlreadyStarted,
            0xA1 => Self::DiscoveryTargetActivationFailed,
            0xA2 => Self::DiscoveryTearDown,
            0xB0 => Self::RfTransmissionError,
            0xB1 => Self::RfProtocolError,
            0xB2 => Self::RfTimeoutError,
            0xC0 => Self::NfceeInterfaceActivationFailed,
            0xC1 => Self::NfceeTransmissionError,
            0xC2 => Self::NfceeProtocolError,
            0xC3 => Self::NfceeTimeoutError,
            0xE0 => Self::BufferFull,
            other => Self::Other(other),
        }
    }
}

impl From<Status> for u8 {
    fn from(s: Status) -> u8 {
        s.as_u8()
    }
}

/// CORE_RESET_CMD reset type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResetType {
    #[default]
    KeepConfig,
    ResetConfig,
}

impl ResetType {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::KeepConfig => 0x00,
            Self::ResetConfig => 0x01,
        }
    }
}

/// Configuration status reported in CORE_RESET_RSP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfigStatus {
    Kept,
    Reset,
    Other(u8),
}

impl From<u8> for ConfigStatus {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::Kept,
            0x01 => Self::Reset,
            other => Self::Other(other),
        }
    }
}

/// RF_DEACTIVATE type
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeactivateType {
    #[display(fmt = "IDLE")]
    Idle,
    #[display(fmt = "SLEEP")]
    Sleep,
    #[display(fmt = "SLEEP_AF")]
    SleepAf,
    #[default]
    #[display(fmt = "DISCOVERY")]
    Discovery,
}

impl DeactivateType {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Idle => 0x00,
            Self::Sleep => 0x01,
            Self::SleepAf => 0x02,
            Self::Discovery => 0x03,
        }
    }
}

impl TryFrom<u8> for DeactivateType {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0x00 => Ok(Self::Idle),
            0x01 => Ok(Self::Sleep),
            0x02 => Ok(Self::SleepAf),
            0x03 => Ok(Self::Discovery),
            other => Err(Error::InvalidParam(format!(
                "deactivate type {:#04x}",
                other
            ))),
        }
    }
}

/// Reason carried in RF_DEACTIVATE_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeactivationReason {
    DhRequest,
    EndpointRequest,
    RfLinkLoss,
    NfcBBadAfi,
    Other(u8),
}

impl From<u8> for DeactivationReason {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::DhRequest,
            0x01 => Self::EndpointRequest,
            0x02 => Self::RfLinkLoss,
            0x03 => Self::NfcBBadAfi,
            other => Self::Other(other),
        }
    }
}

/// RF protocol. Kept as an open newtype: controllers report proprietary
/// values (PN7120 uses 0x80 for Mifare Classic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RfProtocol(u8);

impl RfProtocol {
    pub const UNDETERMINED: Self = Self(0x00);
    pub const T1T: Self = Self(0x01);
    pub const T2T: Self = Self(0x02);
    pub const T3T: Self = Self(0x03);
    pub const ISO_DEP: Self = Self(0x04);
    pub const NFC_DEP: Self = Self(0x05);

    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// RF interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RfInterface(u8);

impl RfInterface {
    pub const NFCEE_DIRECT: Self = Self(0x00);
    pub const FRAME: Self = Self(0x01);
    pub const ISO_DEP: Self = Self(0x02);
    pub const NFC_DEP: Self = Self(0x03);

    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// RF technology and mode (discovery type / activation mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RfTechMode(u8);

impl RfTechMode {
    pub const POLL_A: Self = Self(0x00);
    pub const POLL_B: Self = Self(0x01);
    pub const POLL_F: Self = Self(0x02);
    pub const POLL_A_ACTIVE: Self = Self(0x03);
    pub const POLL_F_ACTIVE: Self = Self(0x05);
    pub const POLL_ISO15693: Self = Self(0x06);
    pub const LISTEN_A: Self = Self(0x80);
    pub const LISTEN_B: Self = Self(0x81);
    pub const LISTEN_F: Self = Self(0x82);
    pub const LISTEN_A_ACTIVE: Self = Self(0x83);
    pub const LISTEN_F_ACTIVE: Self = Self(0x85);
    pub const LISTEN_ISO15693: Self = Self(0x86);

    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_listen(&self) -> bool {
        self.0 & 0x80 != 0
    }
}

/// Mode field of an RF_DISCOVER_MAP entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterfaceMode {
    Poll,
    Listen,
    PollAndListen,
}

impl InterfaceMode {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Poll => 0x01,
            Self::Listen => 0x02,
            Self::PollAndListen => 0x03,
        }
    }
}

/// One RF_DISCOVER_MAP entry: route `protocol` in `mode` to `interface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscoverMap {
    pub protocol: RfProtocol,
    pub mode: InterfaceMode,
    pub interface: RfInterface,
}

impl DiscoverMap {
    pub const fn new(protocol: RfProtocol, mode: InterfaceMode, interface: RfInterface) -> Self {
        Self {
            protocol,
            mode,
            interface,
        }
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [
            self.protocol.as_u8(),
            self.mode.as_u8(),
            self.interface.as_u8(),
        ]
    }
}

/// One RF_DISCOVER_CMD entry: poll or listen `technology` every
/// `frequency` cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscoverConfig {
    pub technology: RfTechMode,
    pub frequency: u8,
}

impl DiscoverConfig {
    pub const fn new(technology: RfTechMode, frequency: u8) -> Self {
        Self {
            technology,
            frequency,
        }
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        [self.technology.as_u8(), self.frequency]
    }
}

/// NFCID (最大 10 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nfcid {
    bytes: [u8; NFCID_MAX_LEN],
    len: u8,
}

impl Nfcid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::HexDump(self.as_bytes()).to_string()
    }
}

impl TryFrom<&[u8]> for Nfcid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > NFCID_MAX_LEN {
            return Err(Error::SyntaxError(format!(
                "nfcid length {} exceeds {}",
                bytes.len(),
                NFCID_MAX_LEN
            )));
        }
        let mut arr = [0u8; NFCID_MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// Poll-A technology specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollAParams {
    pub sens_res: [u8; 2],
    pub nfcid: Nfcid,
    pub sel_res: Option<u8>,
}

/// Technology specific parameters of an activated endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TechParams {
    PollA(PollAParams),
    /// Technologies without a decoder keep the raw bytes.
    Raw(Vec<u8>),
}

/// Decoded RF_INTF_ACTIVATED_NTF
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationRecord {
    pub discovery_id: u8,
    pub interface: RfInterface,
    pub protocol: RfProtocol,
    pub mode: RfTechMode,
    pub max_payload_size: u8,
    pub initial_credits: u8,
    pub tech_params: TechParams,
    pub exchange_mode: RfTechMode,
    pub tx_bitrate: u8,
    pub rx_bitrate: u8,
    pub activation_params: Vec<u8>,
}

impl ActivationRecord {
    pub fn poll_a(&self) -> Option<&PollAParams> {
        match &self.tech_params {
            TechParams::PollA(p) => Some(p),
            TechParams::Raw(_) => None,
        }
    }

    pub fn nfcid(&self) -> Option<&Nfcid> {
        self.poll_a().map(|p| &p.nfcid)
    }
}

/// Decoded RF_DEACTIVATE_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeactivationRecord {
    pub deactivate_type: u8,
    pub reason: DeactivationReason,
}

impl DeactivationRecord {
    pub fn kind(&self) -> Option<DeactivateType> {
        DeactivateType::try_from(self.deactivate_type).ok()
    }
}

/// Decoded CORE_RESET_RSP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResetInfo {
    pub version: u8,
    pub config_status: ConfigStatus,
}

impl ResetInfo {
    pub fn version_major(&self) -> u8 {
        self.version >> 4
    }

    pub fn version_minor(&self) -> u8 {
        self.version & 0x0F
    }
}

/// Decoded CORE_INIT_RSP detail block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InitInfo {
    pub features: [u8; 4],
    pub interfaces: Vec<RfInterface>,
    pub max_logical_connections: u8,
    pub max_routing_table_size: u16,
    pub max_control_payload: u8,
    pub max_large_params: u16,
    pub manufacturer_id: u8,
    pub manufacturer_info: [u8; 4],
}
