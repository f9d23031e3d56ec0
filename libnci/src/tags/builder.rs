// libnci/src/tags/builder.rs

use crate::controller::Nci;
use crate::tags::{SessionConfig, TagSession, TagsCallback};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a [`TagSession`] with optional configuration.
pub struct TagSessionBuilder<C> {
    callback: C,
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
}

impl<C: TagsCallback> TagSessionBuilder<C> {
    pub fn new(callback: C) -> Self {
        Self {
            callback,
            transport: None,
            config: SessionConfig::default(),
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Requires a transport to be provided; otherwise returns InvalidParam.
    pub fn build(self) -> Result<TagSession<C>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidParam("no transport".into()))?;
        Ok(TagSession::new(Nci::new(transport), self.callback, self.config))
    }
}
