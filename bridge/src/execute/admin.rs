//! Admin operations handlers.
//!
//! This module handles:
//! - One-time initialization
//! - Ownership transfer
//! - Claiming stray tokens held by the bridge

use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use common::AssetInfo;

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::limits::{save_limits, LimitLane};
use crate::msg::InitializeMsg;
use crate::state::{
    BridgeStatus, Config, Limits, CONFIG, DEPLOYER, NATIVE_SETTINGS, STATUS,
};
use crate::validator_set::{RemoteValidatorSet, ValidatorSet};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the bridge (deployer only, once).
pub fn execute_initialize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InitializeMsg,
) -> Result<Response, ContractError> {
    let deployer = DEPLOYER.load(deps.storage)?;
    if info.sender != deployer {
        return Err(ContractError::Unauthorized);
    }
    initialize(deps, &env, msg)
}

/// Validate `msg`, store config and limits, and mark the bridge active.
///
/// Shared by `Initialize` and instantiate with an embedded `InitializeMsg`.
pub(crate) fn initialize(
    deps: DepsMut,
    env: &Env,
    msg: InitializeMsg,
) -> Result<Response, ContractError> {
    if STATUS.may_load(deps.storage)? == Some(BridgeStatus::Active) {
        return Err(ContractError::AlreadyInitialized);
    }

    let owner = deps.api.addr_validate(&msg.owner)?;

    let validator_contract = deps
        .api
        .addr_validate(&msg.validator_contract)
        .map_err(|e| ContractError::InvalidValidatorContract {
            reason: e.to_string(),
        })?;
    // Must answer the validator-set interface
    RemoteValidatorSet::new(deps.querier, validator_contract.clone())
        .required_signatures()
        .map_err(|e| ContractError::InvalidValidatorContract {
            reason: e.to_string(),
        })?;

    if msg.gas_price.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "gas_price must be greater than zero".to_string(),
        });
    }
    if msg.required_block_confirmations == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "required_block_confirmations must be greater than zero".to_string(),
        });
    }

    save_limits(
        deps.storage,
        LimitLane::Deposit,
        &Limits {
            daily_limit: msg.daily_limit,
            max_per_tx: msg.max_per_tx,
            min_per_tx: msg.min_per_tx,
        },
    )?;
    save_limits(
        deps.storage,
        LimitLane::Execution,
        &Limits {
            daily_limit: msg.execution_daily_limit,
            max_per_tx: msg.execution_max_per_tx,
            min_per_tx: Uint128::zero(),
        },
    )?;

    let config = Config {
        owner,
        validator_contract,
        gas_price: msg.gas_price,
        required_block_confirmations: msg.required_block_confirmations,
        deployed_at_block: env.block.height,
    };
    CONFIG.save(deps.storage, &config)?;
    STATUS.save(deps.storage, &BridgeStatus::Active)?;

    Ok(Response::new()
        .add_event(
            Event::new("required_block_confirmation_changed").add_attribute(
                "required_block_confirmations",
                config.required_block_confirmations.to_string(),
            ),
        )
        .add_event(
            Event::new("gas_price_changed").add_attribute("gas_price", config.gas_price),
        )
        .add_event(
            Event::new("execution_daily_limit_changed")
                .add_attribute("new_limit", msg.execution_daily_limit),
        )
        .add_event(Event::new("daily_limit_changed").add_attribute("new_limit", msg.daily_limit))
        .add_attribute("method", "initialize")
        .add_attribute("owner", config.owner)
        .add_attribute("validator_contract", config.validator_contract)
        .add_attribute("deployed_at_block", config.deployed_at_block.to_string()))
}

// ============================================================================
// Ownership
// ============================================================================

/// Hand the bridge over to a new owner.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous)
                .add_attribute("new_owner", new_owner),
        )
        .add_attribute("method", "transfer_ownership"))
}

// ============================================================================
// Token Claims
// ============================================================================

/// Send the bridge's whole balance of a stray asset to `to`.
///
/// The bridged native denom backs pending relays and can never be claimed.
pub fn execute_claim_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
    to: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    let settings = NATIVE_SETTINGS.load(deps.storage)?;
    let to_addr = deps.api.addr_validate(&to)?;

    let (amount, message): (Uint128, CosmosMsg) = match &asset {
        AssetInfo::Native { denom } => {
            if *denom == settings.native_denom {
                return Err(ContractError::CannotClaimBridgedAsset {
                    denom: denom.clone(),
                });
            }
            let balance = deps
                .querier
                .query_balance(&env.contract.address, denom)?
                .amount;
            (
                balance,
                CosmosMsg::Bank(BankMsg::Send {
                    to_address: to_addr.to_string(),
                    amount: vec![Coin {
                        denom: denom.clone(),
                        amount: balance,
                    }],
                }),
            )
        }
        AssetInfo::Cw20 { contract_addr } => {
            let balance: BalanceResponse = deps.querier.query_wasm_smart(
                contract_addr,
                &Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            (
                balance.balance,
                CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: contract_addr.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: to_addr.to_string(),
                        amount: balance.balance,
                    })?,
                    funds: vec![],
                }),
            )
        }
    };

    if amount.is_zero() {
        return Err(ContractError::NothingToClaim);
    }

    Ok(Response::new()
        .add_message(message)
        .add_event(
            Event::new("tokens_claimed")
                .add_attribute("asset", asset.to_string())
                .add_attribute("to", to_addr)
                .add_attribute("amount", amount),
        )
        .add_attribute("method", "claim_tokens"))
}
