// libnci/src/tags/mifare.rs

use crate::controller::Nci;
use crate::tags::{DumpChunk, Tag, TagType};
use crate::types::ActivationRecord;
use crate::{TagError, TagResult};

/// Mifare Classic family endpoint. Detected and reported, but reading it
/// needs sector authentication, which is not implemented.
#[derive(Debug)]
pub struct MifareTag {
    activation: ActivationRecord,
}

impl MifareTag {
    pub fn new(activation: ActivationRecord) -> Self {
        Self { activation }
    }
}

impl Tag for MifareTag {
    fn tag_type(&self) -> TagType {
        TagType::Mifare
    }

    fn activation(&self) -> &ActivationRecord {
        &self.activation
    }

    fn start_dump(&mut self) -> TagResult<()> {
        log::debug!("Mifare: dump not supported");
        Err(TagError::Rejected)
    }

    fn handle_dump(&mut self, _nci: &mut Nci) -> TagResult<()> {
        Err(TagError::Rejected)
    }

    fn handle_data(&mut self, _data: &[u8]) -> Option<TagResult<DumpChunk<'_>>> {
        None
    }
}
