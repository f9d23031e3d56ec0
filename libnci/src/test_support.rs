//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize controller frames, a shareable mock transport
//! and a recording callback so tests across the crate and the tests/
//! directory can drive a session the same way.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::Nci;
use crate::protocol::responses::decode_rf_intf_activated_ntf;
use crate::tags::{Detection, DumpChunk, SessionConfig, TagSession, TagType, TagsCallback};
use crate::transport::{MockTransport, Transport};
use crate::types::{
    ActivationRecord, DeactivationRecord, DiscoverConfig, DiscoverMap, ResetType, Status,
};
use crate::{Result, TagResult};

/// NXP 7-byte UID, classified as Type-2.
#[doc(hidden)]
pub const TYPE2_NFCID: [u8; 7] = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];

/// A [`MockTransport`] that stays reachable after being boxed into an engine.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedTransport(Rc<RefCell<MockTransport>>);

impl SharedTransport {
    pub fn push_frame(&self, frame: Vec<u8>) {
        self.0.borrow_mut().push_frame(frame);
    }

    /// Packets written since the last hardware reset.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.0.borrow().sent.clone()
    }

    pub fn set_short_writes(&self, n: usize) {
        self.0.borrow_mut().set_short_writes(n);
    }

    pub fn set_write_failures(&self, n: usize) {
        self.0.borrow_mut().set_write_failures(n);
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().pending()
    }

    pub fn resets(&self) -> usize {
        self.0.borrow().resets
    }
}

impl Transport for SharedTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.0.borrow_mut().write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.0.borrow_mut().read(buf)
    }

    fn wait_until_ready(&mut self) -> Result<()> {
        self.0.borrow_mut().wait_until_ready()
    }

    fn reset(&mut self) -> Result<()> {
        self.0.borrow_mut().reset()
    }
}

/// Owned copy of one callback invocation.
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Reset(TagResult<()>),
    Discover(TagResult<()>),
    Detected(TagResult<Option<TagType>>),
    Deactivated(TagResult<DeactivationRecord>),
    Dump(TagResult<(Vec<u8>, bool)>),
}

#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingCallback {
    pub events: Vec<Recorded>,
}

impl RecordingCallback {
    /// Data of every successful dump chunk, in order.
    pub fn dumped(&self) -> Vec<(Vec<u8>, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Recorded::Dump(Ok(chunk)) => Some(chunk.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TagsCallback for RecordingCallback {
    fn on_reset(&mut self, result: TagResult<()>) {
        self.events.push(Recorded::Reset(result));
    }

    fn on_discover(&mut self, result: TagResult<()>) {
        self.events.push(Recorded::Discover(result));
    }

    fn on_discover_ntf(&mut self, result: TagResult<Detection<'_>>) {
        self.events
            .push(Recorded::Detected(result.map(|d| d.tag_type)));
    }

    fn on_deactivate(&mut self, result: TagResult<DeactivationRecord>) {
        self.events.push(Recorded::Deactivated(result));
    }

    fn on_dump(&mut self, result: TagResult<DumpChunk<'_>>) {
        self.events
            .push(Recorded::Dump(result.map(|c| (c.data.to_vec(), c.more))));
    }
}

fn control(b0: u8, oid: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![b0, oid, payload.len() as u8];
    frame.extend_from_slice(payload);
    frame
}

#[doc(hidden)]
pub fn core_reset_rsp(status: Status) -> Vec<u8> {
    // NCI 1.0, configuration kept
    control(0x40, 0x00, &[status.as_u8(), 0x10, 0x00])
}

/// CORE_INIT_RSP with a complete detail block: two interfaces, routing
/// table 256, control payload 255, large params 1024, manufacturer 0x04.
#[doc(hidden)]
pub fn core_init_rsp(status: Status) -> Vec<u8> {
    control(
        0x40,
        0x01,
        &[
            status.as_u8(),
            0x03,
            0x00,
            0x00,
            0x00,
            0x02,
            0x01,
            0x02,
            0x01,
            0x00,
            0x01,
            0xff,
            0x00,
            0x04,
            0x04,
            0x01,
            0x02,
            0x03,
            0x04,
        ],
    )
}

#[doc(hidden)]
pub fn rf_discover_map_rsp(status: Status) -> Vec<u8> {
    control(0x41, 0x00, &[status.as_u8()])
}

#[doc(hidden)]
pub fn rf_discover_rsp(status: Status) -> Vec<u8> {
    control(0x41, 0x03, &[status.as_u8()])
}

#[doc(hidden)]
pub fn rf_deactivate_rsp(status: Status) -> Vec<u8> {
    control(0x41, 0x06, &[status.as_u8()])
}

#[doc(hidden)]
pub fn rf_deactivate_ntf(deactivate_type: u8, reason: u8) -> Vec<u8> {
    control(0x61, 0x06, &[deactivate_type, reason])
}

#[doc(hidden)]
pub fn conn_credits_ntf() -> Vec<u8> {
    control(0x60, 0x06, &[0x01, 0x00, 0x01])
}

/// RF_INTF_ACTIVATED_NTF payload for a Poll-A endpoint on the frame
/// interface.
#[doc(hidden)]
pub fn intf_activated_poll_a_payload(nfcid: &[u8], sel_res: Option<u8>) -> Vec<u8> {
    let mut tech = vec![0x44, 0x00, nfcid.len() as u8];
    tech.extend_from_slice(nfcid);
    match sel_res {
        Some(sel) => tech.extend_from_slice(&[0x01, sel]),
        None => tech.push(0x00),
    }

    let mut payload = vec![0x01, 0x01, 0x02, 0x00, 0xff, 0x01, tech.len() as u8];
    payload.extend_from_slice(&tech);
    payload.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    payload
}

#[doc(hidden)]
pub fn intf_activated_poll_a(nfcid: &[u8], sel_res: Option<u8>) -> Vec<u8> {
    control(0x61, 0x05, &intf_activated_poll_a_payload(nfcid, sel_res))
}

#[doc(hidden)]
pub fn activation_record(nfcid: &[u8], sel_res: Option<u8>) -> Result<ActivationRecord> {
    decode_rf_intf_activated_ntf(&intf_activated_poll_a_payload(nfcid, sel_res))
}

/// READ reply payload for the `index`-th chunk: 16 recognisable bytes and a
/// zero status.
#[doc(hidden)]
pub fn type2_read_reply(index: u8) -> Vec<u8> {
    let mut reply: Vec<u8> = (0..16u8).map(|i| index.wrapping_mul(0x10) | i).collect();
    reply.push(0x00);
    reply
}

#[doc(hidden)]
pub fn data_frame(cid: u8, payload: &[u8]) -> Vec<u8> {
    control(cid & 0x0f, 0x00, payload)
}

#[doc(hidden)]
pub fn default_maps() -> Vec<DiscoverMap> {
    SessionConfig::default().discover_maps
}

#[doc(hidden)]
pub fn default_configs() -> Vec<DiscoverConfig> {
    SessionConfig::default().discover_configs
}

/// Session over a [`SharedTransport`] with the default configuration.
#[doc(hidden)]
pub fn mock_session() -> (TagSession<RecordingCallback>, SharedTransport) {
    let shared = SharedTransport::default();
    let session = TagSession::new(
        Nci::new(Box::new(shared.clone())),
        RecordingCallback::default(),
        SessionConfig::default(),
    );
    (session, shared)
}

/// Run a full reset sequence.
#[doc(hidden)]
pub fn drive_to_init_done<C: TagsCallback>(
    session: &mut TagSession<C>,
    shared: &SharedTransport,
) -> TagResult<()> {
    shared.push_frame(core_reset_rsp(Status::Ok));
    shared.push_frame(core_init_rsp(Status::Ok));
    session.reset(ResetType::KeepConfig)?;
    session.process_next_event()?;
    session.process_next_event()
}

/// Reset, discover, and activate a Poll-A endpoint.
#[doc(hidden)]
pub fn drive_to_activated<C: TagsCallback>(
    session: &mut TagSession<C>,
    shared: &SharedTransport,
    nfcid: &[u8],
    sel_res: Option<u8>,
) -> TagResult<()> {
    drive_to_init_done(session, shared)?;
    shared.push_frame(rf_discover_map_rsp(Status::Ok));
    shared.push_frame(rf_discover_rsp(Status::Ok));
    shared.push_frame(intf_activated_poll_a(nfcid, sel_res));
    session.discover()?;
    for _ in 0..3 {
        session.process_next_event()?;
    }
    Ok(())
}
