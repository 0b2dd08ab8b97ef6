//! Query handlers for the custom token gateway.
//!
//! None of these fail on an unconfigured gateway.

use cosmwasm_std::{Deps, StdResult};

use crate::lock::is_outbound_locked;
use crate::msg::{
    ConfigResponse, CounterpartResponse, DestinationTokenResponse, IsLockedResponse,
    StatusResponse,
};
use crate::state::{CONFIG, GATEWAY_STATE};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        router: config.router,
        protocol: config.protocol,
        domain: config.domain,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = GATEWAY_STATE.load(deps.storage)?;
    Ok(StatusResponse {
        configured: state.is_configured(),
        enabled: state.is_enabled(),
        gate: config.domain.gate_name().to_string(),
        binding: state.binding().cloned(),
    })
}

/// The gateway serves a single pair, so the input token is ignored.
pub fn query_destination_token(deps: Deps, _token: String) -> StdResult<DestinationTokenResponse> {
    let state = GATEWAY_STATE.load(deps.storage)?;
    Ok(DestinationTokenResponse {
        destination_token: state.binding().map(|b| b.destination_token.clone()),
    })
}

pub fn query_counterpart(deps: Deps) -> StdResult<CounterpartResponse> {
    let state = GATEWAY_STATE.load(deps.storage)?;
    Ok(CounterpartResponse {
        counterpart: state.binding().map(|b| b.counterpart.clone()),
    })
}

pub fn query_is_locked(deps: Deps) -> StdResult<IsLockedResponse> {
    Ok(IsLockedResponse {
        locked: is_outbound_locked(deps.storage)?,
    })
}
