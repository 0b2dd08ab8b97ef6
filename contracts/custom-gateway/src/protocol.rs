//! Delegation to the underlying bridge protocol.
//!
//! Validated calls are turned into messages for the protocol contract
//! without touching amounts, addresses or extension data.

use cosmwasm_std::{to_json_binary, Binary, Coin, CosmosMsg, StdResult, SubMsg, WasmMsg};
use cw_utils::parse_execute_response_data;

use common::ProtocolExecuteMsg;

use crate::error::ContractError;
use crate::state::{Config, OUTBOUND_REPLY_ID};

fn protocol_msg(
    config: &Config,
    msg: &ProtocolExecuteMsg,
    funds: Vec<Coin>,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.protocol.to_string(),
        msg: to_json_binary(msg)?,
        funds,
    }))
}

/// `Initialize` sent once while the gateway is configured.
pub fn initialize_msg(config: &Config, counterpart: &str) -> StdResult<CosmosMsg> {
    let msg = ProtocolExecuteMsg::Initialize {
        counterpart: counterpart.to_string(),
        router: config.router.to_string(),
        inbox: config.domain.inbox().map(|inbox| inbox.to_string()),
    };
    protocol_msg(config, &msg, vec![])
}

/// Outbound delegation. Dispatched with a reply on success so the receipt
/// can be returned and the outbound lock released.
pub fn outbound_submsg(
    config: &Config,
    msg: &ProtocolExecuteMsg,
    funds: Vec<Coin>,
) -> StdResult<SubMsg> {
    Ok(SubMsg::reply_on_success(
        protocol_msg(config, msg, funds)?,
        OUTBOUND_REPLY_ID,
    ))
}

/// Inbound delegation. The protocol's own failure aborts the transaction.
pub fn finalize_msg(config: &Config, msg: &ProtocolExecuteMsg) -> StdResult<CosmosMsg> {
    protocol_msg(config, msg, vec![])
}

/// Strip the execute-response envelope from a sub-message result, leaving
/// the data the protocol set on its own response.
pub fn unwrap_receipt(data: Option<Binary>) -> Result<Option<Binary>, ContractError> {
    match data {
        Some(data) => Ok(parse_execute_response_data(data.as_slice())?.data),
        None => Ok(None),
    }
}
