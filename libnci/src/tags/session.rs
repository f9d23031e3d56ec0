// libnci/src/tags/session.rs

use crate::controller::{Nci, NciEvent};
use crate::tags::{
    CommandFamily, Detection, SessionConfig, SessionState, Tag, TagsCallback, classify,
    create_tag_for,
};
use crate::types::{DeactivateType, ResetType};
use crate::{Error, TagError, TagResult};

/// Owns one controller and sequences reset, discovery, deactivation and
/// tag dumps on top of it.
///
/// Operations return as soon as their first command is sent; the rest of the
/// sequence runs from [`process_next_event`](Self::process_next_event) and
/// completes through the callback.
pub struct TagSession<C: TagsCallback> {
    nci: Nci,
    callback: C,
    config: SessionConfig,
    state: SessionState,
    family: CommandFamily,
    tag: Option<Box<dyn Tag>>,
}

impl<C: TagsCallback> TagSession<C> {
    pub fn new(nci: Nci, callback: C, config: SessionConfig) -> Self {
        Self {
            nci,
            callback,
            config,
            state: SessionState::None,
            family: CommandFamily::None,
            tag: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn family(&self) -> CommandFamily {
        self.family
    }

    /// Handler of the currently activated tag, if it was classified.
    pub fn tag(&self) -> Option<&dyn Tag> {
        self.tag.as_deref()
    }

    pub fn callback(&self) -> &C {
        &self.callback
    }

    pub fn callback_mut(&mut self) -> &mut C {
        &mut self.callback
    }

    pub fn nci(&self) -> &Nci {
        &self.nci
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Hard-reset the controller and bring it back to idle.
    ///
    /// Accepted in any state; whatever was in progress is abandoned.
    /// Completes through `on_reset`.
    pub fn reset(&mut self, reset_type: ResetType) -> TagResult<()> {
        log::info!("tags: reset from {}/{}", self.family, self.state);
        self.tag = None;
        if let Err(e) = self.start_reset(reset_type) {
            self.state = SessionState::None;
            self.family = CommandFamily::None;
            return Err(self.fold(e));
        }
        Ok(())
    }

    fn start_reset(&mut self, reset_type: ResetType) -> crate::Result<()> {
        self.nci.hard_reset()?;
        self.state = SessionState::InitReset;
        self.family = CommandFamily::Reset;
        self.nci.reset_controller(reset_type)
    }

    /// Configure the discovery map and start polling.
    ///
    /// Only after a completed reset. `on_discover` reports that polling
    /// started; `on_discover_ntf` reports each activated endpoint.
    pub fn discover(&mut self) -> TagResult<()> {
        self.require(SessionState::InitDone, "discover")?;
        let family = self.family;
        self.state = SessionState::DiscoverMap;
        self.family = CommandFamily::Discover;
        if let Err(e) = self.nci.configure_discovery_map(&self.config.discover_maps) {
            self.set_state(SessionState::InitDone);
            self.family = family;
            return Err(self.fold(e));
        }
        Ok(())
    }

    /// Release the activated endpoint and resume discovery.
    ///
    /// Accepted once an endpoint is activated, including between dump
    /// chunks. Completes through `on_deactivate`.
    pub fn deactivate(&mut self) -> TagResult<()> {
        if !matches!(
            self.state,
            SessionState::DiscoverActivated | SessionState::Dump
        ) {
            log::debug!("tags: deactivate rejected in {}", self.state);
            return Err(TagError::Rejected);
        }
        let (state, family) = (self.state, self.family);
        let tag = self.tag.take();
        self.state = SessionState::Deactivate;
        self.family = CommandFamily::Deactivate;
        if let Err(e) = self.nci.deactivate(DeactivateType::Discovery) {
            self.state = state;
            self.family = family;
            self.tag = tag;
            return Err(self.fold(e));
        }
        Ok(())
    }

    /// Read the activated tag's memory. Chunks arrive through `on_dump`;
    /// call [`continue_dump`](Self::continue_dump) for each further chunk
    /// while `more` is set.
    pub fn dump(&mut self) -> TagResult<()> {
        self.require(SessionState::DiscoverActivated, "dump")?;
        let Some(tag) = self.tag.as_mut() else {
            log::error!("tags: dump without a supported tag");
            return Err(TagError::Failed);
        };
        if let Err(e) = tag.start_dump() {
            log::error!("tags: {} dump not started: {}", tag.tag_type(), e);
            return Err(TagError::Failed);
        }
        self.state = SessionState::Dump;
        self.family = CommandFamily::Dump;
        if let Err(e) = tag.handle_dump(&mut self.nci) {
            log::error!("tags: dump failed: {}", e);
            return Err(TagError::Failed);
        }
        self.state = SessionState::DumpRsp;
        Ok(())
    }

    /// Fetch the next chunk of a dump. Rejected once the last chunk has been
    /// delivered.
    pub fn continue_dump(&mut self) -> TagResult<()> {
        self.require(SessionState::Dump, "continue_dump")?;
        let Some(tag) = self.tag.as_mut() else {
            return Err(TagError::Failed);
        };
        tag.handle_dump(&mut self.nci)?;
        self.state = SessionState::DumpRsp;
        Ok(())
    }

    /// Wait for one packet from the controller and advance the current
    /// sequence. Packet-level failures are returned without touching the
    /// session state or invoking callbacks.
    pub fn process_next_event(&mut self) -> TagResult<()> {
        match self.nci.process_next_event() {
            Ok(event) => {
                self.handle_event(event);
                Ok(())
            }
            Err(e) => Err(self.fold(e)),
        }
    }

    fn handle_event(&mut self, event: NciEvent) {
        log::debug!("tags: {} in {}/{}", event.name(), self.family, self.state);
        match event {
            NciEvent::ConnCredits => {}
            NciEvent::Data { cid, payload } => self.handle_data(cid, &payload),
            event => match self.family {
                CommandFamily::Reset => self.handle_reset_event(event),
                CommandFamily::Discover => self.handle_discover_event(event),
                CommandFamily::Deactivate => self.handle_deactivate_event(event),
                CommandFamily::Dump => {
                    log::error!("tags: unexpected {} during dump", event.name());
                    self.callback.on_dump(Err(TagError::Failed));
                }
                CommandFamily::None => {
                    log::debug!("tags: {} dropped, nothing in progress", event.name());
                }
            },
        }
    }

    fn handle_data(&mut self, cid: u8, payload: &[u8]) {
        if self.family != CommandFamily::Dump {
            log::debug!("tags: data on conn {} dropped in {}", cid, self.state);
            return;
        }
        let reply = match self.tag.as_mut() {
            Some(tag) if self.state == SessionState::DumpRsp => tag.handle_data(payload),
            _ => None,
        };
        match reply {
            Some(result) => {
                self.state = SessionState::Dump;
                self.callback.on_dump(result);
            }
            None => {
                log::error!("tags: unexpected data in {}", self.state);
                self.callback.on_dump(Err(TagError::Failed));
            }
        }
    }

    fn handle_reset_event(&mut self, event: NciEvent) {
        match (self.state, event) {
            (SessionState::InitReset, NciEvent::CoreReset(Ok(_))) => {
                self.set_state(SessionState::InitInit);
                if let Err(e) = self.nci.init_controller() {
                    let err = self.fold(e);
                    self.callback.on_reset(Err(err));
                }
            }
            (SessionState::InitInit, NciEvent::CoreInit(Ok(()))) => {
                self.set_state(SessionState::InitDone);
                log::info!("tags: controller ready");
                self.callback.on_reset(Ok(()));
            }
            (SessionState::InitReset, NciEvent::CoreReset(Err(e)))
            | (SessionState::InitInit, NciEvent::CoreInit(Err(e))) => {
                let err = self.fold(e);
                self.callback.on_reset(Err(err));
            }
            (_, event @ (NciEvent::CoreReset(_) | NciEvent::CoreInit(_))) => {
                let err = self.unexpected(&event);
                self.callback.on_reset(Err(err));
            }
            // late reply to whatever the reset abandoned
            (_, event) => {
                log::debug!("tags: stale {} dropped in {}", event.name(), self.state);
            }
        }
    }

    fn handle_discover_event(&mut self, event: NciEvent) {
        match (self.state, event) {
            (SessionState::DiscoverMap, NciEvent::RfDiscoverMap(Ok(()))) => {
                self.set_state(SessionState::Discover);
                if let Err(e) = self.nci.start_discovery(&self.config.discover_configs) {
                    let err = self.fold(e);
                    self.callback.on_discover(Err(err));
                }
            }
            (SessionState::Discover, NciEvent::RfDiscover(Ok(()))) => {
                self.set_state(SessionState::DiscoverNtf);
                self.callback.on_discover(Ok(()));
            }
            (SessionState::DiscoverNtf, NciEvent::RfIntfActivated(Ok(record))) => {
                self.set_state(SessionState::DiscoverActivated);
                let tag_type = classify(&record);
                match tag_type {
                    Some(t) => log::info!(
                        "tags: {} tag {}",
                        t,
                        record.nfcid().map(|id| id.to_hex()).unwrap_or_default()
                    ),
                    None => log::info!(
                        "tags: unsupported endpoint, protocol {:#04x}",
                        record.protocol.as_u8()
                    ),
                }
                self.tag = tag_type.map(|t| create_tag_for(t, record.clone()));
                self.callback.on_discover_ntf(Ok(Detection {
                    activation: &record,
                    tag_type,
                }));
            }
            (SessionState::DiscoverMap, NciEvent::RfDiscoverMap(Err(e)))
            | (SessionState::Discover, NciEvent::RfDiscover(Err(e))) => {
                let err = self.fold(e);
                self.callback.on_discover(Err(err));
            }
            (SessionState::DiscoverNtf, NciEvent::RfIntfActivated(Err(e))) => {
                let err = self.fold(e);
                self.callback.on_discover_ntf(Err(err));
            }
            (state, event) => {
                let err = self.unexpected(&event);
                if matches!(
                    state,
                    SessionState::DiscoverNtf | SessionState::DiscoverActivated
                ) {
                    self.callback.on_discover_ntf(Err(err));
                } else {
                    self.callback.on_discover(Err(err));
                }
            }
        }
    }

    fn handle_deactivate_event(&mut self, event: NciEvent) {
        match (self.state, event) {
            (SessionState::Deactivate, NciEvent::RfDeactivate(Ok(()))) => {
                self.set_state(SessionState::DeactivateRsp);
            }
            (SessionState::DeactivateRsp, NciEvent::RfDeactivateNtf(Ok(record))) => {
                self.set_state(SessionState::DeactivateNtf);
                log::info!("tags: deactivated ({:?})", record.reason);
                // back to waiting for the next endpoint
                self.set_state(SessionState::DiscoverNtf);
                self.family = CommandFamily::Discover;
                self.callback.on_deactivate(Ok(record));
            }
            (SessionState::Deactivate, NciEvent::RfDeactivate(Err(e)))
            | (SessionState::DeactivateRsp, NciEvent::RfDeactivateNtf(Err(e))) => {
                let err = self.fold(e);
                self.callback.on_deactivate(Err(err));
            }
            (_, event) => {
                let err = self.unexpected(&event);
                self.callback.on_deactivate(Err(err));
            }
        }
    }

    fn require(&self, expected: SessionState, what: &str) -> TagResult<()> {
        if self.state != expected {
            log::debug!("tags: {} rejected in {}", what, self.state);
            return Err(TagError::Rejected);
        }
        Ok(())
    }

    fn unexpected(&self, event: &NciEvent) -> TagError {
        log::error!(
            "tags: unexpected {} in {}/{} (controller {})",
            event.name(),
            self.family,
            self.state,
            self.nci.state()
        );
        TagError::Failed
    }

    // Log the detailed engine error, then fold it into the coarse space.
    fn fold(&self, err: Error) -> TagError {
        log::error!(
            "tags: {} [{}] in {}/{}",
            err,
            err.status(),
            self.family,
            self.state
        );
        err.into()
    }

    fn set_state(&mut self, next: SessionState) {
        log::debug!("tags: state {} -> {}", self.state, next);
        self.state = next;
    }
}
