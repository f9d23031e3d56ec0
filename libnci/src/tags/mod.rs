// libnci/src/tags/mod.rs

//! Tag session orchestrator.
//!
//! A [`TagSession`] sequences the NCI exchanges behind four user-level
//! operations (reset, discover, deactivate, dump) and reports completion
//! through a [`TagsCallback`]. Activated endpoints are classified into a
//! tag family and handed to a [`Tag`] implementation for reading.

use derive_more::Display;

use crate::constants::{NFCID_DOUBLE_SIZE, NFCID_MANUFACTURER_NXP, SEL_RES_MIFARE_MASK};
use crate::controller::Nci;
use crate::types::{ActivationRecord, Nfcid};
use crate::TagResult;

pub mod builder;
pub mod callback;
pub mod config;
pub mod mifare;
pub mod session;
pub mod state;
pub mod type2;

pub use builder::TagSessionBuilder;
pub use callback::{Detection, DumpChunk, TagsCallback};
pub use config::SessionConfig;
pub use mifare::MifareTag;
pub use session::TagSession;
pub use state::{CommandFamily, SessionState};
pub use type2::Type2Tag;

/// Tag families the session can recognise.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    #[display(fmt = "TYPE2")]
    Type2,
    #[display(fmt = "MIFARE")]
    Mifare,
}

/// Per-family handler for an activated endpoint.
///
/// A dump is driven by the session: `start_dump` once, then
/// `handle_dump` to send the next request and `handle_data` for each reply.
pub trait Tag {
    fn tag_type(&self) -> TagType;

    fn activation(&self) -> &ActivationRecord;

    fn nfcid(&self) -> Option<&Nfcid> {
        self.activation().nfcid()
    }

    /// Rewind to the start of memory. Rejected while a dump is in progress.
    fn start_dump(&mut self) -> TagResult<()>;

    /// Send the next read request, if one is due.
    fn handle_dump(&mut self, nci: &mut Nci) -> TagResult<()>;

    /// Consume a reply. `None` when the handler was not expecting data.
    fn handle_data(&mut self, data: &[u8]) -> Option<TagResult<DumpChunk<'_>>>;
}

/// Guess the tag family from Poll-A activation parameters.
///
/// A 7-byte NFCID from manufacturer 0x04 (NXP) is treated as Type-2;
/// otherwise a single SEL_RES byte with bits 3 and 4 set is treated as
/// Mifare Classic. This mirrors vendor application notes and is not a
/// protocol rule.
pub fn classify(activation: &ActivationRecord) -> Option<TagType> {
    let params = activation.poll_a()?;
    let nfcid = params.nfcid.as_bytes();
    if nfcid.len() == NFCID_DOUBLE_SIZE && nfcid[0] == NFCID_MANUFACTURER_NXP {
        Some(TagType::Type2)
    } else if params
        .sel_res
        .is_some_and(|sel| sel & SEL_RES_MIFARE_MASK == SEL_RES_MIFARE_MASK)
    {
        Some(TagType::Mifare)
    } else {
        None
    }
}

pub fn create_tag_for(tag_type: TagType, activation: ActivationRecord) -> Box<dyn Tag> {
    match tag_type {
        TagType::Type2 => Box::new(Type2Tag::new(activation)),
        TagType::Mifare => Box::new(MifareTag::new(activation)),
    }
}
