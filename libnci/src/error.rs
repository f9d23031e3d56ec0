// libnci/src/error.rs

use thiserror::Error;

use crate::types::Status;

/// 共通エラー型
///
/// Every variant maps onto an NCI status code through [`Error::status`], so
/// callers that only care about the wire-level outcome can fold errors back
/// into the controller's own status space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The command is not allowed in the current controller or session state.
    #[error("rejected in current state")]
    Rejected,

    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("syntax error: {0}")]
    SyntaxError(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown group id {gid:#04x}")]
    UnknownGid { gid: u8 },

    #[error("unknown opcode {oid:#04x} in group {gid:#04x}")]
    UnknownOid { gid: u8, oid: u8 },

    /// Non-OK status reported by the controller in a response.
    #[error("controller status: {0}")]
    Status(Status),

    /// Non-zero status byte trailing a tag reply.
    #[error("tag status {0:#04x}")]
    TagStatus(u8),

    #[error("no header received")]
    NoHeader,

    #[error("no payload received")]
    NoPayload,

    #[error("short write: expected {expected}, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    #[error("operation timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fine-grained NCI status equivalent of this error.
    pub fn status(&self) -> Status {
        match self {
            Self::Rejected => Status::Rejected,
            Self::InvalidParam(_) => Status::InvalidParam,
            Self::SyntaxError(_) | Self::InvalidLength { .. } => Status::SyntaxError,
            Self::UnknownGid { .. } => Status::UnknownGid,
            Self::UnknownOid { .. } => Status::UnknownOid,
            Self::Status(s) => *s,
            Self::TagStatus(_)
            | Self::NoHeader
            | Self::NoPayload
            | Self::ShortWrite { .. }
            | Self::Timeout
            | Self::Transport(_) => Status::Failed,
        }
    }

    /// Build an error from a controller status byte. `OK` has no error
    /// equivalent and yields `None`.
    pub fn from_status(status: Status) -> Option<Self> {
        match status {
            Status::Ok => None,
            Status::Rejected => Some(Self::Rejected),
            other => Some(Self::Status(other)),
        }
    }
}

/// Coarse status space reported by the tag session layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagError {
    #[error("rejected")]
    Rejected,
    #[error("failed")]
    Failed,
}

pub type TagResult<T> = std::result::Result<T, TagError>;

impl From<Error> for TagError {
    fn from(err: Error) -> Self {
        match err.status() {
            Status::Rejected => Self::Rejected,
            _ => Self::Failed,
        }
    }
}

impl From<Status> for TagError {
    fn from(status: Status) -> Self {
        match status {
            Status::Rejected => Self::Rejected,
            _ => Self::Failed,
        }
    }
}
