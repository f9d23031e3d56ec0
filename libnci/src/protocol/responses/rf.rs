// libnci/src/protocol/responses/rf.rs

use crate::constants::{
    NCI_RF_PARAM_SIZE_DEACTIVATE_NTF, NCI_RF_PARAM_SIZE_DEACTIVATE_RSP,
    NCI_RF_PARAM_SIZE_DISCOVER_MAP_RSP, NCI_RF_PARAM_SIZE_DISCOVER_RSP,
    NCI_RF_PARAM_SIZE_INTF_ACTIVATED_NTF, NFCID_MAX_LEN,
};
use crate::protocol::parser;
use crate::types::{
    ActivationRecord, DeactivationReason, DeactivationRecord, Nfcid, PollAParams, RfInterface,
    RfProtocol, RfTechMode, TechParams,
};
use crate::{Error, Result};

/// Decode RF_DISCOVER_MAP_RSP payload: status(1)
pub fn decode_rf_discover_map_rsp(data: &[u8]) -> Result<()> {
    parser::expect_len(data, NCI_RF_PARAM_SIZE_DISCOVER_MAP_RSP)?;
    parser::expect_status_ok(data)
}

/// Decode RF_DISCOVER_RSP payload: status(1)
pub fn decode_rf_discover_rsp(data: &[u8]) -> Result<()> {
    parser::expect_len(data, NCI_RF_PARAM_SIZE_DISCOVER_RSP)?;
    parser::expect_status_ok(data)
}

/// Decode RF_DEACTIVATE_RSP payload: status(1)
pub fn decode_rf_deactivate_rsp(data: &[u8]) -> Result<()> {
    parser::expect_len(data, NCI_RF_PARAM_SIZE_DEACTIVATE_RSP)?;
    parser::expect_status_ok(data)
}

/// Decode RF_DEACTIVATE_NTF payload: type(1) + reason(1)
pub fn decode_rf_deactivate_ntf(data: &[u8]) -> Result<DeactivationRecord> {
    parser::expect_len(data, NCI_RF_PARAM_SIZE_DEACTIVATE_NTF)?;
    Ok(DeactivationRecord {
        deactivate_type: data[0],
        reason: DeactivationReason::from(data[1]),
    })
}

/// Decode RF_INTF_ACTIVATED_NTF payload
/// Layout: discovery_id(1) + interface(1) + protocol(1) + mode(1) +
/// max_payload(1) + credits(1) + tech_len(1) + tech_params(tech_len) +
/// exchange_mode(1) + tx_bitrate(1) + rx_bitrate(1) + act_len(1) +
/// activation_params(act_len)
pub fn decode_rf_intf_activated_ntf(data: &[u8]) -> Result<ActivationRecord> {
    parser::ensure_len(data, NCI_RF_PARAM_SIZE_INTF_ACTIVATED_NTF)?;

    let mode = RfTechMode::new(data[3]);
    let tech_len = data[6] as usize;
    let tech = parser::slice_at(data, 7, tech_len)?;
    let tech_params = decode_tech_params(mode, tech)?;

    let p = 7 + tech_len;
    let exchange_mode = RfTechMode::new(parser::byte_at(data, p)?);
    let tx_bitrate = parser::byte_at(data, p + 1)?;
    let rx_bitrate = parser::byte_at(data, p + 2)?;
    let act_len = parser::byte_at(data, p + 3)? as usize;
    let activation_params = parser::slice_at(data, p + 4, act_len)?.to_vec();

    Ok(ActivationRecord {
        discovery_id: data[0],
        interface: RfInterface::new(data[1]),
        protocol: RfProtocol::new(data[2]),
        mode,
        max_payload_size: data[4],
        initial_credits: data[5],
        tech_params,
        exchange_mode,
        tx_bitrate,
        rx_bitrate,
        activation_params,
    })
}

fn decode_tech_params(mode: RfTechMode, tech: &[u8]) -> Result<TechParams> {
    if mode == RfTechMode::POLL_A && !tech.is_empty() {
        return decode_poll_a(tech).map(TechParams::PollA);
    }
    Ok(TechParams::Raw(tech.to_vec()))
}

/// Poll-A layout: sens_res(2) + nfcid_len(1) + nfcid + sel_res_len(1) +
/// sel_res(sel_res_len, 0 or 1)
fn decode_poll_a(tech: &[u8]) -> Result<PollAParams> {
    let sens = parser::slice_at(tech, 0, 2)?;
    let nfcid_len = parser::byte_at(tech, 2)? as usize;
    if nfcid_len > NFCID_MAX_LEN {
        return Err(Error::SyntaxError(format!(
            "nfcid length {} exceeds {}",
            nfcid_len, NFCID_MAX_LEN
        )));
    }
    let nfcid = Nfcid::try_from(parser::slice_at(tech, 3, nfcid_len)?)?;
    let sel_res_len = parser::byte_at(tech, 3 + nfcid_len)?;
    let sel_res = match sel_res_len {
        0 => None,
        1 => Some(parser::byte_at(tech, 4 + nfcid_len)?),
        n => {
            return Err(Error::SyntaxError(format!("sel_res length {}", n)));
        }
    };
    Ok(PollAParams {
        sens_res: [sens[0], sens[1]],
        nfcid,
        sel_res,
    })
}
