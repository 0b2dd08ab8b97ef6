//! Custom Token Gateway - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_configure, execute_disable, execute_enable, execute_finalize_inbound_transfer,
    execute_outbound_transfer, handle_outbound_reply,
};
use crate::msg::{DomainMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_counterpart, query_destination_token, query_is_locked, query_status,
};
use crate::state::{
    Config, Domain, GatewayState, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GATEWAY_STATE,
    OUTBOUND_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let router = deps.api.addr_validate(&msg.router)?;
    let protocol = deps.api.addr_validate(&msg.protocol)?;
    let domain = match msg.domain {
        DomainMsg::Origin { inbox } => Domain::Origin {
            inbox: deps.api.addr_validate(&inbox)?,
        },
        DomainMsg::Destination {} => Domain::Destination,
    };

    let config = Config {
        owner,
        router,
        domain,
        protocol,
    };
    CONFIG.save(deps.storage, &config)?;
    GATEWAY_STATE.save(deps.storage, &GatewayState::Unconfigured)?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("router", config.router)
        .add_attribute("protocol", config.protocol)
        .add_attribute("gate", config.domain.gate_name());
    if let Some(inbox) = config.domain.inbox() {
        response = response.add_attribute("inbox", inbox);
    }
    Ok(response)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Administration
        ExecuteMsg::Configure {
            source_token,
            destination_token,
            counterpart,
        } => execute_configure(deps, info, source_token, destination_token, counterpart),
        ExecuteMsg::Enable {} => execute_enable(deps, info),
        ExecuteMsg::Disable {} => execute_disable(deps, info),

        // Transfers
        ExecuteMsg::OutboundTransfer {
            token,
            to,
            amount,
            max_gas,
            gas_price_bid,
            data,
            refund_to,
        } => execute_outbound_transfer(
            deps,
            info,
            token,
            to,
            amount,
            max_gas,
            gas_price_bid,
            data,
            refund_to,
        ),
        ExecuteMsg::FinalizeInboundTransfer {
            token,
            from,
            to,
            amount,
            data,
        } => execute_finalize_inbound_transfer(deps, info, token, from, to, amount, data),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        OUTBOUND_REPLY_ID => handle_outbound_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::DestinationToken { token } => {
            to_json_binary(&query_destination_token(deps, token)?)
        }
        QueryMsg::Counterpart {} => to_json_binary(&query_counterpart(deps)?),
        QueryMsg::IsLocked {} => to_json_binary(&query_is_locked(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
