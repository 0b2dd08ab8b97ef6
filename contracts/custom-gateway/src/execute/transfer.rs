//! Transfer handlers (outbound and inbound).
//!
//! Every transfer is checked against the gate and the single allowed token
//! before it is forwarded to the underlying protocol.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Reply, Response, StdError, Uint128};

use common::ProtocolExecuteMsg;

use crate::error::ContractError;
use crate::lock::{acquire_outbound_lock, release_outbound_lock};
use crate::protocol::{finalize_msg, outbound_submsg, unwrap_receipt};
use crate::state::{Domain, Gate, GatewayState, TokenBinding, CONFIG, GATEWAY_STATE};

fn ensure_allowed_token(binding: Option<&TokenBinding>, token: &str) -> Result<(), ContractError> {
    match binding {
        Some(binding) if binding.source_token == token => Ok(()),
        _ => Err(ContractError::UnsupportedToken {
            token: token.to_string(),
        }),
    }
}

// ============================================================================
// Outbound
// ============================================================================

/// Start a transfer of the allowed token to the other domain.
#[allow(clippy::too_many_arguments)]
pub fn execute_outbound_transfer(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    to: String,
    amount: Uint128,
    max_gas: u64,
    gas_price_bid: Uint128,
    data: Binary,
    refund_to: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = GATEWAY_STATE.load(deps.storage)?;

    // Token first, so a wrong token reports the same error in every gate state
    let open = match &state {
        GatewayState::Configured { binding, gate } => {
            ensure_allowed_token(Some(binding), &token)?;
            *gate == Gate::Enabled
        }
        GatewayState::Unconfigured => false,
    };
    if !open {
        return Err(ContractError::TransfersDisabled {
            gate: config.domain.gate_name().to_string(),
        });
    }

    if config.domain.holds_custody() {
        acquire_outbound_lock(deps.storage)?;
    }

    // The destination protocol has no use for routing parameters or a
    // separate refund address.
    let (refund_to, max_gas, gas_price_bid) = match config.domain {
        Domain::Origin { .. } => (refund_to.unwrap_or_else(|| to.clone()), max_gas, gas_price_bid),
        Domain::Destination => (to.clone(), 0, Uint128::zero()),
    };

    let msg = ProtocolExecuteMsg::OutboundTransfer {
        token: token.clone(),
        refund_to: refund_to.clone(),
        to: to.clone(),
        amount,
        max_gas,
        gas_price_bid,
        data,
    };

    Ok(Response::new()
        .add_submessage(outbound_submsg(&config, &msg, info.funds)?)
        .add_attribute("method", "outbound_transfer")
        .add_attribute("gate", config.domain.gate_name())
        .add_attribute("sender", info.sender)
        .add_attribute("token", token)
        .add_attribute("to", to)
        .add_attribute("refund_to", refund_to)
        .add_attribute("amount", amount.to_string())
        .add_attribute("max_gas", max_gas.to_string())
        .add_attribute("gas_price_bid", gas_price_bid.to_string()))
}

/// Reply for a delegated outbound transfer: release the lock and hand back
/// the protocol's receipt as this call's data.
pub fn handle_outbound_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    release_outbound_lock(deps.storage);

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let receipt = unwrap_receipt(result.data)?;

    let response = Response::new().add_attribute("method", "outbound_transfer_reply");
    Ok(match receipt {
        Some(receipt) => response.set_data(receipt),
        None => response,
    })
}

// ============================================================================
// Inbound
// ============================================================================

/// Complete a transfer delivered from the counterpart gateway.
///
/// Counterpart authentication belongs to the protocol, which receives the
/// delivering account as `sender`.
pub fn execute_finalize_inbound_transfer(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    from: String,
    to: String,
    amount: Uint128,
    data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = GATEWAY_STATE.load(deps.storage)?;
    ensure_allowed_token(state.binding(), &token)?;

    let msg = ProtocolExecuteMsg::FinalizeInboundTransfer {
        token: token.clone(),
        from: from.clone(),
        to: to.clone(),
        amount,
        data,
        sender: info.sender.to_string(),
    };

    Ok(Response::new()
        .add_message(finalize_msg(&config, &msg)?)
        .add_attribute("method", "finalize_inbound_transfer")
        .add_attribute("token", token)
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string()))
}
