//! Query handlers for the foreign bridge contract.
//!
//! All handlers are read-only.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Storage, Uint128};

use common::encode_evm_address;

use crate::hash::bridge_mode;
use crate::ledger::{is_relayed, load_record};
use crate::limits::{current_day, load_limits, total_for_day, within_limit, LimitLane};
use crate::msg::{
    BridgeInstanceIdResponse, BridgeInterfacesVersionResponse, BridgeModeResponse,
    ConfigResponse, CurrentDayResponse, DailyUsageResponse, DayTotalResponse, DepositResponse,
    IsInitializedResponse, LaneUsage, LimitsResponse, RelayRecordResponse, RelayedMessageResponse,
    WithinLimitResponse,
};
use crate::state::{
    BridgeStatus, DepositRecord, CONFIG, CONTRACT_VERSION, DEPOSITS, DEPOSIT_BY_NONCE,
    NATIVE_SETTINGS, STATUS,
};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_is_initialized(deps: Deps) -> StdResult<IsInitializedResponse> {
    let status = STATUS
        .may_load(deps.storage)?
        .unwrap_or(BridgeStatus::Uninitialized);
    Ok(IsInitializedResponse {
        initialized: status == BridgeStatus::Active,
        status,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let settings = NATIVE_SETTINGS.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        validator_contract: config.validator_contract,
        native_denom: settings.native_denom,
        address_prefix: settings.address_prefix,
        gas_price: config.gas_price,
        required_block_confirmations: config.required_block_confirmations,
        deployed_at_block: config.deployed_at_block,
        bridge_instance_id: encode_evm_address(&settings.bridge_instance_id),
    })
}

pub fn query_bridge_instance_id(deps: Deps) -> StdResult<BridgeInstanceIdResponse> {
    let settings = NATIVE_SETTINGS.load(deps.storage)?;
    Ok(BridgeInstanceIdResponse {
        bridge_instance_id: encode_evm_address(&settings.bridge_instance_id),
    })
}

pub fn query_bridge_mode() -> BridgeModeResponse {
    BridgeModeResponse {
        mode: format!("0x{}", hex::encode(bridge_mode())),
    }
}

/// `major.minor.patch` of the deployed code
pub fn query_bridge_interfaces_version() -> StdResult<BridgeInterfacesVersionResponse> {
    let invalid = || StdError::generic_err(format!("invalid version: {}", CONTRACT_VERSION));

    // Pre-release suffixes such as "0-rc" keep only their leading digits
    let parts = CONTRACT_VERSION
        .split('.')
        .map(|part| {
            part.split(|c: char| !c.is_ascii_digit())
                .next()
                .unwrap_or("")
                .parse::<u64>()
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match parts.as_slice() {
        [major, minor, patch, ..] => Ok(BridgeInterfacesVersionResponse {
            major: *major,
            minor: *minor,
            patch: *patch,
        }),
        _ => Err(invalid()),
    }
}

// ============================================================================
// Limit Queries
// ============================================================================

pub fn query_limits(deps: Deps) -> StdResult<LimitsResponse> {
    Ok(LimitsResponse {
        deposit: load_limits(deps.storage, LimitLane::Deposit)?,
        execution: load_limits(deps.storage, LimitLane::Execution)?,
    })
}

pub fn query_current_day(env: Env) -> CurrentDayResponse {
    CurrentDayResponse {
        day: current_day(&env),
    }
}

pub fn query_day_total(deps: Deps, lane: LimitLane, day: u64) -> StdResult<DayTotalResponse> {
    Ok(DayTotalResponse {
        day,
        total: total_for_day(deps.storage, lane, day)?,
    })
}

pub fn query_daily_usage(deps: Deps, env: Env) -> StdResult<DailyUsageResponse> {
    let day = current_day(&env);
    Ok(DailyUsageResponse {
        day,
        deposit: lane_usage(deps.storage, LimitLane::Deposit, day)?,
        execution: lane_usage(deps.storage, LimitLane::Execution, day)?,
    })
}

pub fn query_within_limit(
    deps: Deps,
    env: Env,
    lane: LimitLane,
    amount: Uint128,
) -> StdResult<WithinLimitResponse> {
    Ok(WithinLimitResponse {
        within_limit: within_limit(deps.storage, lane, current_day(&env), amount),
    })
}

// ============================================================================
// Ledger & Deposit Queries
// ============================================================================

pub fn query_relayed_message(
    deps: Deps,
    source_tx_id: Binary,
) -> StdResult<RelayedMessageResponse> {
    let id = parse_id(&source_tx_id, "source_tx_id")?;
    let record = load_record(deps.storage, &id)?.map(|r| RelayRecordResponse {
        recipient: r.recipient,
        recipient_raw: encode_evm_address(&r.recipient_raw),
        amount: r.amount,
        signers: r.signers,
        relayed_at: r.relayed_at,
        block_height: r.block_height,
    });
    Ok(RelayedMessageResponse {
        source_tx_id,
        relayed: is_relayed(deps.storage, &id)?,
        record,
    })
}

pub fn query_deposit(deps: Deps, nonce: u64) -> StdResult<Option<DepositResponse>> {
    let Some(id) = DEPOSIT_BY_NONCE.may_load(deps.storage, nonce)? else {
        return Ok(None);
    };
    Ok(DEPOSITS
        .may_load(deps.storage, &id)?
        .map(deposit_response))
}

pub fn query_deposit_by_id(deps: Deps, deposit_id: Binary) -> StdResult<Option<DepositResponse>> {
    let id = parse_id(&deposit_id, "deposit_id")?;
    Ok(DEPOSITS
        .may_load(deps.storage, &id)?
        .map(deposit_response))
}

// ============================================================================
// Helpers
// ============================================================================

fn lane_usage(storage: &dyn Storage, lane: LimitLane, day: u64) -> StdResult<LaneUsage> {
    let limits = load_limits(storage, lane)?;
    let total = total_for_day(storage, lane, day)?;
    Ok(LaneUsage {
        total,
        daily_limit: limits.daily_limit,
        // Saturates when the limit was lowered below today's total
        remaining: limits.daily_limit.saturating_sub(total),
    })
}

fn deposit_response(record: DepositRecord) -> DepositResponse {
    DepositResponse {
        nonce: record.nonce,
        deposit_id: Binary::from(record.deposit_id.to_vec()),
        sender: record.sender,
        recipient: encode_evm_address(&record.recipient),
        amount: record.amount,
        deposited_at: record.deposited_at,
        block_height: record.block_height,
    }
}

fn parse_id(id: &Binary, field: &str) -> StdResult<[u8; 32]> {
    id.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid {} length: expected 32 bytes, got {}",
            field,
            id.len()
        ))
    })
}
