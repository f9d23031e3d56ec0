// libnci/src/tags/config.rs

use crate::constants::NCI_DISCOVERY_FREQUENCY_ALWAYS;
use crate::types::{
    DiscoverConfig, DiscoverMap, InterfaceMode, RfInterface, RfProtocol, RfTechMode,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discovery parameters a [`TagSession`](crate::tags::TagSession) sends to
/// the controller.
///
/// Deactivation always asks the controller to resume discovery; the
/// session loops back to waiting for the next endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    pub discover_maps: Vec<DiscoverMap>,
    pub discover_configs: Vec<DiscoverConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            discover_maps: vec![
                DiscoverMap::new(RfProtocol::T1T, InterfaceMode::Poll, RfInterface::FRAME),
                DiscoverMap::new(RfProtocol::T2T, InterfaceMode::Poll, RfInterface::FRAME),
                DiscoverMap::new(RfProtocol::T3T, InterfaceMode::Poll, RfInterface::FRAME),
            ],
            discover_configs: vec![
                DiscoverConfig::new(RfTechMode::POLL_A, NCI_DISCOVERY_FREQUENCY_ALWAYS),
                DiscoverConfig::new(RfTechMode::POLL_F, NCI_DISCOVERY_FREQUENCY_ALWAYS),
            ],
        }
    }
}

impl SessionConfig {
    pub fn with_discover_maps(mut self, maps: Vec<DiscoverMap>) -> Self {
        self.discover_maps = maps;
        self
    }

    pub fn with_discover_configs(mut self, configs: Vec<DiscoverConfig>) -> Self {
        self.discover_configs = configs;
        self
    }
}
