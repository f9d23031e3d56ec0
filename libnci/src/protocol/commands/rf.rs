// libnci/src/protocol/commands/rf.rs

use crate::constants::{NCI_DISCOVER_CONF_ENTRY_LEN, NCI_DISCOVER_MAP_ENTRY_LEN, NCI_MAX_PAYLOAD_LEN};
use crate::types::{DeactivateType, DiscoverConfig, DiscoverMap};
use crate::{Error, Result};

/// Encode RF_DISCOVER_MAP_CMD payload
/// Layout: count(1) + (protocol, mode, interface) * count
pub fn encode_rf_discover_map(maps: &[DiscoverMap]) -> Result<Vec<u8>> {
    let len = checked_list_len(maps.len(), NCI_DISCOVER_MAP_ENTRY_LEN, "discover map")?;
    let mut buf = Vec::with_capacity(len);
    buf.push(maps.len() as u8);
    for m in maps {
        buf.extend_from_slice(&m.to_bytes());
    }
    Ok(buf)
}

/// Encode RF_DISCOVER_CMD payload
/// Layout: count(1) + (technology, frequency) * count
pub fn encode_rf_discover(configs: &[DiscoverConfig]) -> Result<Vec<u8>> {
    let len = checked_list_len(
        configs.len(),
        NCI_DISCOVER_CONF_ENTRY_LEN,
        "discover configuration",
    )?;
    let mut buf = Vec::with_capacity(len);
    buf.push(configs.len() as u8);
    for c in configs {
        buf.extend_from_slice(&c.to_bytes());
    }
    Ok(buf)
}

/// Encode RF_DEACTIVATE_CMD payload: deactivation type (1 byte)
pub fn encode_rf_deactivate(deactivate_type: DeactivateType) -> Vec<u8> {
    vec![deactivate_type.as_u8()]
}

// count byte + entries must fit in one packet
fn checked_list_len(count: usize, entry_len: usize, what: &str) -> Result<usize> {
    if count == 0 {
        return Err(Error::InvalidParam(format!("empty {} list", what)));
    }
    let len = 1 + count * entry_len;
    if len > NCI_MAX_PAYLOAD_LEN {
        return Err(Error::InvalidParam(format!(
            "{} list of {} entries does not fit in one packet",
            what, count
        )));
    }
    Ok(len)
}
