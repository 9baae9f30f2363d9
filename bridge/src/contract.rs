//! Foreign Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    execute_claim_tokens, execute_deposit, execute_initialize, execute_set_gas_price,
    execute_set_limit, execute_set_required_block_confirmations, execute_signatures,
    execute_transfer_ownership, initialize,
};
use crate::hash::bridge_instance_id;
use crate::limits::{LimitField, LimitLane};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridge_instance_id, query_bridge_interfaces_version, query_bridge_mode, query_config,
    query_current_day, query_daily_usage, query_day_total, query_deposit, query_deposit_by_id,
    query_is_initialized, query_limits, query_relayed_message, query_within_limit,
};
use crate::state::{
    BridgeStatus, NativeSettings, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_ADDRESS_PREFIX,
    DEFAULT_NATIVE_DENOM, DEPLOYER, DEPOSIT_NONCE, NATIVE_SETTINGS, STATUS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let native_denom = msg
        .native_denom
        .unwrap_or_else(|| DEFAULT_NATIVE_DENOM.to_string());
    if native_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native_denom must not be empty".to_string(),
        });
    }
    let address_prefix = msg
        .address_prefix
        .unwrap_or_else(|| DEFAULT_ADDRESS_PREFIX.to_string());
    if address_prefix.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "address_prefix must not be empty".to_string(),
        });
    }

    let settings = NativeSettings {
        native_denom,
        address_prefix,
        bridge_instance_id: bridge_instance_id(&env.contract.address),
    };
    NATIVE_SETTINGS.save(deps.storage, &settings)?;
    DEPLOYER.save(deps.storage, &info.sender)?;
    STATUS.save(deps.storage, &BridgeStatus::Uninitialized)?;
    DEPOSIT_NONCE.save(deps.storage, &0u64)?;

    let response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("deployer", info.sender)
        .add_attribute("native_denom", &settings.native_denom)
        .add_attribute(
            "bridge_instance_id",
            common::encode_evm_address(&settings.bridge_instance_id),
        );

    match msg.initialize {
        Some(init) => {
            let initialized = initialize(deps, &env, init)?;
            Ok(response
                .add_attributes(initialized.attributes)
                .add_events(initialized.events))
        }
        None => Ok(response),
    }
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Lifecycle
        ExecuteMsg::Initialize(init) => execute_initialize(deps, env, info, init),

        // Transfers
        ExecuteMsg::ExecuteSignatures {
            message,
            signatures,
        } => execute_signatures(deps, env, info, message, signatures),
        ExecuteMsg::Deposit { recipient } => execute_deposit(deps, env, info, recipient),

        // Deposit lane
        ExecuteMsg::SetDailyLimit { daily_limit } => execute_set_limit(
            deps,
            info,
            LimitLane::Deposit,
            LimitField::DailyLimit,
            daily_limit,
        ),
        ExecuteMsg::SetMaxPerTx { max_per_tx } => execute_set_limit(
            deps,
            info,
            LimitLane::Deposit,
            LimitField::MaxPerTx,
            max_per_tx,
        ),
        ExecuteMsg::SetMinPerTx { min_per_tx } => execute_set_limit(
            deps,
            info,
            LimitLane::Deposit,
            LimitField::MinPerTx,
            min_per_tx,
        ),

        // Execution lane
        ExecuteMsg::SetExecutionDailyLimit { daily_limit } => execute_set_limit(
            deps,
            info,
            LimitLane::Execution,
            LimitField::DailyLimit,
            daily_limit,
        ),
        ExecuteMsg::SetExecutionMaxPerTx { max_per_tx } => execute_set_limit(
            deps,
            info,
            LimitLane::Execution,
            LimitField::MaxPerTx,
            max_per_tx,
        ),
        ExecuteMsg::SetExecutionMinPerTx { min_per_tx } => execute_set_limit(
            deps,
            info,
            LimitLane::Execution,
            LimitField::MinPerTx,
            min_per_tx,
        ),

        // Parameters
        ExecuteMsg::SetGasPrice { gas_price } => execute_set_gas_price(deps, info, gas_price),
        ExecuteMsg::SetRequiredBlockConfirmations { confirmations } => {
            execute_set_required_block_confirmations(deps, info, confirmations)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::ClaimTokens { asset, to } => execute_claim_tokens(deps, env, info, asset, to),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsInitialized {} => to_json_binary(&query_is_initialized(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Limits {} => to_json_binary(&query_limits(deps)?),
        QueryMsg::CurrentDay {} => to_json_binary(&query_current_day(env)),
        QueryMsg::TotalSpentPerDay { day } => {
            to_json_binary(&query_day_total(deps, LimitLane::Deposit, day)?)
        }
        QueryMsg::TotalExecutedPerDay { day } => {
            to_json_binary(&query_day_total(deps, LimitLane::Execution, day)?)
        }
        QueryMsg::DailyUsage {} => to_json_binary(&query_daily_usage(deps, env)?),
        QueryMsg::WithinLimit { amount } => {
            to_json_binary(&query_within_limit(deps, env, LimitLane::Deposit, amount)?)
        }
        QueryMsg::WithinExecutionLimit { amount } => {
            to_json_binary(&query_within_limit(deps, env, LimitLane::Execution, amount)?)
        }
        QueryMsg::RelayedMessage { source_tx_id } => {
            to_json_binary(&query_relayed_message(deps, source_tx_id)?)
        }
        QueryMsg::Deposit { nonce } => to_json_binary(&query_deposit(deps, nonce)?),
        QueryMsg::DepositById { deposit_id } => {
            to_json_binary(&query_deposit_by_id(deps, deposit_id)?)
        }
        QueryMsg::BridgeInstanceId {} => to_json_binary(&query_bridge_instance_id(deps)?),
        QueryMsg::BridgeMode {} => to_json_binary(&query_bridge_mode()),
        QueryMsg::BridgeInterfacesVersion {} => {
            to_json_binary(&query_bridge_interfaces_version()?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Swap in new code. Every storage key is kept as is.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::MigrationMismatch {
            stored: stored.contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("version", CONTRACT_VERSION))
}
