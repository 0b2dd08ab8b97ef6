//! Shared setup for gateway integration tests.
//!
//! `mock_protocol` stands in for the underlying bridge protocol: it accepts a
//! single `Initialize`, numbers outbound transfers, authenticates inbound
//! finalization against the counterpart, and records every call.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::ProtocolExecuteMsg;
use custom_gateway::msg::{
    DomainMsg, ExecuteMsg, InstantiateMsg, IsLockedResponse, QueryMsg, StatusResponse,
};

pub const OWNER: &str = "owner";
pub const USER: &str = "user";
pub const ROUTER: &str = "router";
pub const INBOX: &str = "inbox";
pub const COUNTERPART: &str = "counterpart";
pub const RECIPIENT: &str = "recipient";

pub const TOKEN_A: &str = "token_a";
pub const TOKEN_B: &str = "token_b";
pub const TOKEN_X: &str = "token_x";

pub const FEE_DENOM: &str = "uatom";

// ============================================================================
// Mock Protocol
// ============================================================================

#[cw_serde]
pub struct MockInstantiateMsg {
    /// Call back into the sender's `OutboundTransfer` once
    pub reenter: bool,
}

#[cw_serde]
pub enum MockQueryMsg {
    Initialized {},
    Outbound {},
    Inbound {},
}

#[cw_serde]
pub struct Initialized {
    pub counterpart: String,
    pub router: String,
    pub inbox: Option<String>,
}

/// Receipt the mock protocol returns from `OutboundTransfer`
#[cw_serde]
pub struct OutboundReceipt {
    pub sequence: u64,
}

#[cw_serde]
pub struct RecordedOutbound {
    pub msg: ProtocolExecuteMsg,
    pub funds: Vec<Coin>,
}

const INITIALIZED: Item<Initialized> = Item::new("initialized");
const SEQUENCE: Item<u64> = Item::new("sequence");
const REENTER: Item<bool> = Item::new("reenter");
const OUTBOUND: Item<Vec<RecordedOutbound>> = Item::new("outbound");
const INBOUND: Item<Vec<ProtocolExecuteMsg>> = Item::new("inbound");

fn mock_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockInstantiateMsg,
) -> StdResult<Response> {
    SEQUENCE.save(deps.storage, &0)?;
    REENTER.save(deps.storage, &msg.reenter)?;
    OUTBOUND.save(deps.storage, &vec![])?;
    INBOUND.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

fn mock_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ProtocolExecuteMsg,
) -> StdResult<Response> {
    match msg.clone() {
        ProtocolExecuteMsg::Initialize {
            counterpart,
            router,
            inbox,
        } => {
            if INITIALIZED.may_load(deps.storage)?.is_some() {
                return Err(StdError::generic_err("protocol already initialized"));
            }
            INITIALIZED.save(
                deps.storage,
                &Initialized {
                    counterpart,
                    router,
                    inbox,
                },
            )?;
            Ok(Response::new())
        }
        ProtocolExecuteMsg::OutboundTransfer {
            token,
            to,
            amount,
            max_gas,
            gas_price_bid,
            data,
            refund_to,
        } => {
            if INITIALIZED.may_load(deps.storage)?.is_none() {
                return Err(StdError::generic_err("protocol not initialized"));
            }
            if amount.is_zero() {
                return Err(StdError::generic_err("protocol rejected zero amount"));
            }

            let sequence = SEQUENCE.load(deps.storage)? + 1;
            SEQUENCE.save(deps.storage, &sequence)?;
            OUTBOUND.update(deps.storage, |mut calls| -> StdResult<_> {
                calls.push(RecordedOutbound {
                    msg,
                    funds: info.funds.clone(),
                });
                Ok(calls)
            })?;

            let mut response =
                Response::new().set_data(to_json_binary(&OutboundReceipt { sequence })?);
            if REENTER.load(deps.storage)? {
                REENTER.save(deps.storage, &false)?;
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: info.sender.to_string(),
                    msg: to_json_binary(&ExecuteMsg::OutboundTransfer {
                        token,
                        to,
                        amount,
                        max_gas,
                        gas_price_bid,
                        data,
                        refund_to: Some(refund_to),
                    })?,
                    funds: vec![],
                });
            }
            Ok(response)
        }
        ProtocolExecuteMsg::FinalizeInboundTransfer { sender, .. } => {
            let initialized = INITIALIZED
                .may_load(deps.storage)?
                .ok_or_else(|| StdError::generic_err("protocol not initialized"))?;
            if sender != initialized.counterpart {
                return Err(StdError::generic_err("sender is not the counterpart gateway"));
            }
            INBOUND.update(deps.storage, |mut calls| -> StdResult<_> {
                calls.push(msg);
                Ok(calls)
            })?;
            Ok(Response::new())
        }
    }
}

fn mock_query(deps: Deps, _env: Env, msg: MockQueryMsg) -> StdResult<Binary> {
    match msg {
        MockQueryMsg::Initialized {} => to_json_binary(&INITIALIZED.may_load(deps.storage)?),
        MockQueryMsg::Outbound {} => to_json_binary(&OUTBOUND.load(deps.storage)?),
        MockQueryMsg::Inbound {} => to_json_binary(&INBOUND.load(deps.storage)?),
    }
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        custom_gateway::contract::execute,
        custom_gateway::contract::instantiate,
        custom_gateway::contract::query,
    )
    .with_reply(custom_gateway::contract::reply)
    .with_migrate(custom_gateway::contract::migrate);
    Box::new(contract)
}

fn contract_protocol() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(mock_execute, mock_instantiate, mock_query);
    Box::new(contract)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Side {
    Origin,
    Destination,
}

pub struct Suite {
    pub app: App,
    pub gateway: Addr,
    pub protocol: Addr,
    pub gateway_code_id: u64,
}

/// Instantiate a protocol and an unconfigured gateway on `side`.
pub fn setup_unconfigured(side: Side, reenter: bool) -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);
    let user = Addr::unchecked(USER);

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(1_000_000, FEE_DENOM))
            .unwrap();
    });

    let protocol_code_id = app.store_code(contract_protocol());
    let protocol = app
        .instantiate_contract(
            protocol_code_id,
            owner.clone(),
            &MockInstantiateMsg { reenter },
            &[],
            "bridge-protocol",
            None,
        )
        .unwrap();

    let domain = match side {
        Side::Origin => DomainMsg::Origin {
            inbox: INBOX.to_string(),
        },
        Side::Destination => DomainMsg::Destination {},
    };

    let gateway_code_id = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: OWNER.to_string(),
                router: ROUTER.to_string(),
                protocol: protocol.to_string(),
                domain,
            },
            &[],
            "custom-gateway",
            Some(OWNER.to_string()),
        )
        .unwrap();

    Suite {
        app,
        gateway,
        protocol,
        gateway_code_id,
    }
}

/// Instantiate and configure a gateway for the TOKEN_A / TOKEN_B pair.
pub fn setup(side: Side) -> Suite {
    let mut suite = setup_unconfigured(side, false);
    suite.configure(OWNER, TOKEN_A, TOKEN_B, COUNTERPART).unwrap();
    suite
}

pub fn outbound_msg(token: &str, amount: u128) -> ExecuteMsg {
    ExecuteMsg::OutboundTransfer {
        token: token.to_string(),
        to: RECIPIENT.to_string(),
        amount: Uint128::from(amount),
        max_gas: 100_000,
        gas_price_bid: Uint128::from(25u128),
        data: Binary::from(b"extension".to_vec()),
        refund_to: None,
    }
}

pub fn inbound_msg(token: &str, amount: u128) -> ExecuteMsg {
    ExecuteMsg::FinalizeInboundTransfer {
        token: token.to_string(),
        from: "remote_sender".to_string(),
        to: RECIPIENT.to_string(),
        amount: Uint128::from(amount),
        data: Binary::default(),
    }
}

impl Suite {
    pub fn execute(&mut self, sender: &str, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), self.gateway.clone(), msg, &[])
    }

    pub fn execute_with_funds(
        &mut self,
        sender: &str,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), self.gateway.clone(), msg, funds)
    }

    pub fn configure(
        &mut self,
        sender: &str,
        source_token: &str,
        destination_token: &str,
        counterpart: &str,
    ) -> anyhow::Result<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Configure {
                source_token: source_token.to_string(),
                destination_token: destination_token.to_string(),
                counterpart: counterpart.to_string(),
            },
        )
    }

    pub fn enable(&mut self, sender: &str) -> anyhow::Result<AppResponse> {
        self.execute(sender, &ExecuteMsg::Enable {})
    }

    pub fn disable(&mut self, sender: &str) -> anyhow::Result<AppResponse> {
        self.execute(sender, &ExecuteMsg::Disable {})
    }

    pub fn status(&self) -> StatusResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::Status {})
            .unwrap()
    }

    pub fn is_locked(&self) -> bool {
        let res: IsLockedResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::IsLocked {})
            .unwrap();
        res.locked
    }

    pub fn protocol_initialized(&self) -> Option<Initialized> {
        self.app
            .wrap()
            .query_wasm_smart(&self.protocol, &MockQueryMsg::Initialized {})
            .unwrap()
    }

    pub fn protocol_outbound(&self) -> Vec<RecordedOutbound> {
        self.app
            .wrap()
            .query_wasm_smart(&self.protocol, &MockQueryMsg::Outbound {})
            .unwrap()
    }

    pub fn protocol_inbound(&self) -> Vec<ProtocolExecuteMsg> {
        self.app
            .wrap()
            .query_wasm_smart(&self.protocol, &MockQueryMsg::Inbound {})
            .unwrap()
    }
}

/// Root cause message of a failed execution.
pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
