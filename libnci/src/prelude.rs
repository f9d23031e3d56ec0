// libnci/src/prelude.rs

pub use crate::controller::{ControllerState, Nci, NciEvent};
pub use crate::protocol::{Command, Frame, Header, MessageType};
pub use crate::tags::{
    CommandFamily, Detection, DumpChunk, SessionConfig, SessionState, Tag, TagSession,
    TagSessionBuilder, TagType, TagsCallback,
};
pub use crate::transport::Transport;
pub use crate::{
    ActivationRecord, DeactivateType, DeactivationRecord, DiscoverConfig, DiscoverMap, Error,
    Nfcid, ResetType, Result, Status, TagError, TagResult,
};

// Re-export small utilities for convenience
pub use crate::utils::HexDump;
