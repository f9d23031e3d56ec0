// libnci/src/tags/type2.rs

//! NFC Forum Type-2 tag reader.
//!
//! Memory is addressed in 4-byte blocks; READ returns 4 blocks at once, so
//! the 16 statically addressable blocks come back in four chunks.

use crate::constants::{
    NCI_CID_RF_STATIC, T2T_CMD_READ, T2T_FIRST_BLOCK, T2T_LAST_BLOCK, T2T_READ_BLOCKS,
    T2T_READ_LEN,
};
use crate::controller::Nci;
use crate::tags::{DumpChunk, Tag, TagType};
use crate::types::ActivationRecord;
use crate::{Error, Result, TagError, TagResult};

/// Start block of the last READ.
const LAST_READ_BLOCK: u8 = T2T_LAST_BLOCK + 1 - T2T_READ_BLOCKS;
/// READ reply: data followed by one status byte.
const READ_REPLY_LEN: usize = T2T_READ_LEN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DumpState {
    #[default]
    None,
    Dump,
    DumpRsp,
}

#[derive(Debug)]
pub struct Type2Tag {
    activation: ActivationRecord,
    state: DumpState,
    block: u8,
    chunk: [u8; T2T_READ_LEN],
}

impl Type2Tag {
    pub fn new(activation: ActivationRecord) -> Self {
        Self {
            activation,
            state: DumpState::None,
            block: T2T_FIRST_BLOCK,
            chunk: [0u8; T2T_READ_LEN],
        }
    }

    /// First block of the next READ.
    pub fn cursor(&self) -> u8 {
        self.block
    }

    /// A dump has been started and has not yet finished or failed.
    pub fn is_dumping(&self) -> bool {
        self.state != DumpState::None
    }
}

impl Tag for Type2Tag {
    fn tag_type(&self) -> TagType {
        TagType::Type2
    }

    fn activation(&self) -> &ActivationRecord {
        &self.activation
    }

    fn start_dump(&mut self) -> TagResult<()> {
        if self.state != DumpState::None {
            return Err(TagError::Rejected);
        }
        self.block = T2T_FIRST_BLOCK;
        self.state = DumpState::Dump;
        Ok(())
    }

    fn handle_dump(&mut self, nci: &mut Nci) -> TagResult<()> {
        match self.state {
            DumpState::Dump => {
                if self.block > LAST_READ_BLOCK {
                    return Err(TagError::Rejected);
                }
                log::debug!("T2T: READ block {}", self.block);
                nci.send_data(NCI_CID_RF_STATIC, &[T2T_CMD_READ, self.block])
                    .map_err(|e| {
                        log::error!("T2T: READ block {} failed: {}", self.block, e);
                        TagError::from(e)
                    })?;
                self.state = DumpState::DumpRsp;
                Ok(())
            }
            // waiting for the reply
            DumpState::DumpRsp => Ok(()),
            DumpState::None => Err(TagError::Rejected),
        }
    }

    fn handle_data(&mut self, data: &[u8]) -> Option<TagResult<DumpChunk<'_>>> {
        if self.state != DumpState::DumpRsp {
            return None;
        }
        if let Err(e) = check_read_reply(data) {
            log::error!("T2T: READ reply for block {}: {}", self.block, e);
            self.state = DumpState::None;
            return Some(Err(e.into()));
        }

        self.chunk.copy_from_slice(&data[..T2T_READ_LEN]);
        let more = self.block < LAST_READ_BLOCK;
        if more {
            self.block += T2T_READ_BLOCKS;
            self.state = DumpState::Dump;
        } else {
            self.state = DumpState::None;
        }
        Some(Ok(DumpChunk {
            data: &self.chunk,
            more,
        }))
    }
}

fn check_read_reply(data: &[u8]) -> Result<()> {
    if data.len() != READ_REPLY_LEN {
        return Err(Error::InvalidLength {
            expected: READ_REPLY_LEN,
            actual: data.len(),
        });
    }
    match data[T2T_READ_LEN] {
        0 => Ok(()),
        status => Err(Error::TagStatus(status)),
    }
}
