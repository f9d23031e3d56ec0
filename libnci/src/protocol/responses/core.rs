// libnci/src/protocol/responses/core.rs

use crate::constants::{NCI_CORE_PARAM_SIZE_INIT_RSP, NCI_CORE_PARAM_SIZE_RESET_RSP};
use crate::protocol::parser;
use crate::types::{ConfigStatus, InitInfo, ResetInfo, RfInterface};
use crate::Result;

/// Decode CORE_RESET_RSP payload
/// Layout: status(1) + nci_version(1) + config_status(1)
pub fn decode_core_reset_rsp(data: &[u8]) -> Result<ResetInfo> {
    parser::expect_len(data, NCI_CORE_PARAM_SIZE_RESET_RSP)?;
    parser::expect_status_ok(data)?;
    Ok(ResetInfo {
        version: data[1],
        config_status: ConfigStatus::from(data[2]),
    })
}

/// Decode CORE_INIT_RSP payload.
///
/// Only the minimum length and the status gate the response. The detail
/// block is decoded best-effort: controllers in the field disagree on its
/// exact shape, so an inconsistent block yields `None` instead of an error.
pub fn decode_core_init_rsp(data: &[u8]) -> Result<Option<InitInfo>> {
    parser::ensure_len(data, NCI_CORE_PARAM_SIZE_INIT_RSP)?;
    parser::expect_status_ok(data)?;
    match decode_init_details(data) {
        Ok(info) => Ok(Some(info)),
        Err(e) => {
            log::warn!("CORE_INIT_RSP details not decoded: {}", e);
            Ok(None)
        }
    }
}

/// Layout after status: features(4) + n(1) + interfaces(n) +
/// max_logical_connections(1) + max_routing_table_size(2, LE) +
/// max_control_payload(1) + max_large_params(2, LE) + manufacturer_id(1) +
/// manufacturer_info(4)
fn decode_init_details(data: &[u8]) -> Result<InitInfo> {
    let mut features = [0u8; 4];
    features.copy_from_slice(parser::slice_at(data, 1, 4)?);

    let n = parser::byte_at(data, 5)? as usize;
    let interfaces = parser::slice_at(data, 6, n)?
        .iter()
        .map(|&b| RfInterface::new(b))
        .collect();

    let p = 6 + n;
    let max_logical_connections = parser::byte_at(data, p)?;
    let max_routing_table_size = parser::le_u16_at(data, p + 1)?;
    let max_control_payload = parser::byte_at(data, p + 3)?;
    let max_large_params = parser::le_u16_at(data, p + 4)?;
    let manufacturer_id = parser::byte_at(data, p + 6)?;
    let mut manufacturer_info = [0u8; 4];
    manufacturer_info.copy_from_slice(parser::slice_at(data, p + 7, 4)?);

    Ok(InitInfo {
        features,
        interfaces,
        max_logical_connections,
        max_routing_table_size,
        max_control_payload,
        max_large_params,
        manufacturer_id,
        manufacturer_info,
    })
}
