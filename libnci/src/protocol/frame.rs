// libnci/src/protocol/frame.rs

use crate::constants::{
    NCI_GID_MASK, NCI_HEADER_LEN, NCI_MAX_CONN_ID, NCI_MAX_PAYLOAD_LEN, NCI_MT_MASK, NCI_MT_SHIFT,
    NCI_OID_MASK, NCI_PBF_MASK,
};
use crate::protocol::parser;
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// NCI message type (MT field, 3 bits)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    #[display(fmt = "DATA")]
    Data,
    #[display(fmt = "CMD")]
    Command,
    #[display(fmt = "RSP")]
    Response,
    #[display(fmt = "NTF")]
    Notification,
}

impl MessageType {
    pub fn as_bits(&self) -> u8 {
        match self {
            Self::Data => 0,
            Self::Command => 1,
            Self::Response => 2,
            Self::Notification => 3,
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Data),
            1 => Ok(Self::Command),
            2 => Ok(Self::Response),
            3 => Ok(Self::Notification),
            other => Err(Error::SyntaxError(format!("invalid message type {}", other))),
        }
    }
}

/// Packet header
///
/// Wire layout: `[MT(3) | PBF(1) | GID or CID(4)] [RFU(2) | OID(6)] [L]`.
/// For DATA packets `gid` carries the connection id and `oid` is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub mt: MessageType,
    pub pbf: bool,
    pub gid: u8,
    pub oid: u8,
    pub len: u8,
}

impl Header {
    pub fn control(mt: MessageType, gid: u8, oid: u8, len: u8) -> Self {
        Self {
            mt,
            pbf: false,
            gid: gid & NCI_GID_MASK,
            oid: oid & NCI_OID_MASK,
            len,
        }
    }

    pub fn data(cid: u8, len: u8) -> Self {
        Self {
            mt: MessageType::Data,
            pbf: false,
            gid: cid & NCI_GID_MASK,
            oid: 0,
            len,
        }
    }

    /// Connection id of a DATA packet.
    pub fn cid(&self) -> u8 {
        self.gid
    }

    /// True for a segment that is not the last one of its message.
    pub fn is_segmented(&self) -> bool {
        self.pbf
    }

    pub fn payload_len(&self) -> usize {
        self.len as usize
    }

    pub fn encode(&self) -> [u8; NCI_HEADER_LEN] {
        let mut b0 = (self.mt.as_bits() << NCI_MT_SHIFT) | (self.gid & NCI_GID_MASK);
        if self.pbf {
            b0 |= NCI_PBF_MASK;
        }
        [b0, self.oid & NCI_OID_MASK, self.len]
    }

    /// Parse the first three bytes of `bytes`. Segmentation is reported, not
    /// rejected; see `Frame::decode` for the full packet checks.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        parser::ensure_len(bytes, NCI_HEADER_LEN)?;
        let b0 = bytes[0];
        let mt = MessageType::try_from((b0 & NCI_MT_MASK) >> NCI_MT_SHIFT)?;
        Ok(Self {
            mt,
            pbf: b0 & NCI_PBF_MASK != 0,
            gid: b0 & NCI_GID_MASK,
            oid: bytes[1] & NCI_OID_MASK,
            len: bytes[2],
        })
    }
}

/// A complete, unsegmented NCI packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: Header,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Build a control packet (CMD/RSP/NTF).
    pub fn control(mt: MessageType, gid: u8, oid: u8, payload: &[u8]) -> Result<Self> {
        let len = checked_payload_len(payload)?;
        Ok(Self {
            header: Header::control(mt, gid, oid, len),
            payload: payload.to_vec(),
        })
    }

    /// Build a DATA packet addressed to connection `cid`.
    pub fn data(cid: u8, payload: &[u8]) -> Result<Self> {
        if cid > NCI_MAX_CONN_ID {
            return Err(Error::InvalidParam(format!("conn id {} out of range", cid)));
        }
        let len = checked_payload_len(payload)?;
        Ok(Self {
            header: Header::data(cid, len),
            payload: payload.to_vec(),
        })
    }

    /// Size of the packet on the wire.
    pub fn wire_len(&self) -> usize {
        NCI_HEADER_LEN + self.payload.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        out.extend_from_slice(&self.header.encode());
        out.extend_from_slice(&self.payload);
        out
    }

    /// Decode one packet occupying all of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let header = Header::decode(bytes)?;
        let expected = NCI_HEADER_LEN + header.payload_len();
        if bytes.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        if header.is_segmented() {
            return Err(Error::SyntaxError("segmented packet".into()));
        }
        Ok(Self {
            header,
            payload: bytes[NCI_HEADER_LEN..].to_vec(),
        })
    }
}

fn checked_payload_len(payload: &[u8]) -> Result<u8> {
    if payload.len() > NCI_MAX_PAYLOAD_LEN {
        return Err(Error::InvalidParam(format!(
            "payload of {} bytes exceeds {}",
            payload.len(),
            NCI_MAX_PAYLOAD_LEN
        )));
    }
    Ok(payload.len() as u8)
}
