// libnci/src/tags/callback.rs

use crate::tags::TagType;
use crate::types::{ActivationRecord, DeactivationRecord};
use crate::TagResult;

/// One block of dumped tag memory.
///
/// `data` is only valid for the duration of the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpChunk<'a> {
    pub data: &'a [u8],
    /// More chunks follow; call `continue_dump` to fetch the next one.
    pub more: bool,
}

/// An endpoint was activated during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection<'a> {
    pub activation: &'a ActivationRecord,
    /// `None` when the endpoint is not a supported tag family.
    pub tag_type: Option<TagType>,
}

/// Completion notifications from a [`TagSession`](crate::tags::TagSession).
///
/// Every method has an empty default so an application only implements the
/// ones it cares about. Callbacks run inside `process_next_event`.
pub trait TagsCallback {
    fn on_reset(&mut self, _result: TagResult<()>) {}

    fn on_discover(&mut self, _result: TagResult<()>) {}

    fn on_discover_ntf(&mut self, _result: TagResult<Detection<'_>>) {}

    fn on_deactivate(&mut self, _result: TagResult<DeactivationRecord>) {}

    fn on_dump(&mut self, _result: TagResult<DumpChunk<'_>>) {}
}

impl<T: TagsCallback + ?Sized> TagsCallback for Box<T> {
    fn on_reset(&mut self, result: TagResult<()>) {
        (**self).on_reset(result)
    }

    fn on_discover(&mut self, result: TagResult<()>) {
        (**self).on_discover(result)
    }

    fn on_discover_ntf(&mut self, result: TagResult<Detection<'_>>) {
        (**self).on_discover_ntf(result)
    }

    fn on_deactivate(&mut self, result: TagResult<DeactivationRecord>) {
        (**self).on_deactivate(result)
    }

    fn on_dump(&mut self, result: TagResult<DumpChunk<'_>>) {
        (**self).on_dump(result)
    }
}
