//! Configuration management handlers.
//!
//! This module handles:
//! - Deposit and execution limit lanes
//! - Gas price hint
//! - Required block confirmations

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::ensure_owner;
use crate::limits::{update_limit, LimitField, LimitLane};
use crate::state::CONFIG;

// ============================================================================
// Limits
// ============================================================================

/// Set one limit on one lane, e.g. the execution lane's max per transaction.
pub fn execute_set_limit(
    deps: DepsMut,
    info: MessageInfo,
    lane: LimitLane,
    field: LimitField,
    value: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let limits = update_limit(deps.storage, lane, field, value)?;

    let event_name = format!("{}{}_changed", lane.event_prefix(), field.name());
    Ok(Response::new()
        .add_event(Event::new(event_name).add_attribute("new_limit", value))
        .add_attribute("method", format!("set_{}{}", lane.event_prefix(), field.name()))
        .add_attribute("lane", lane.name())
        .add_attribute("daily_limit", limits.daily_limit)
        .add_attribute("max_per_tx", limits.max_per_tx)
        .add_attribute("min_per_tx", limits.min_per_tx))
}

// ============================================================================
// Validator Parameters
// ============================================================================

/// Set the gas price hint published to validators.
pub fn execute_set_gas_price(
    deps: DepsMut,
    info: MessageInfo,
    gas_price: Uint128,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;

    if gas_price.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "gas_price must be greater than zero".to_string(),
        });
    }

    config.gas_price = gas_price;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(Event::new("gas_price_changed").add_attribute("gas_price", gas_price))
        .add_attribute("method", "set_gas_price"))
}

/// Set how many confirmations validators wait for before signing.
pub fn execute_set_required_block_confirmations(
    deps: DepsMut,
    info: MessageInfo,
    confirmations: u64,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;

    if confirmations == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "required_block_confirmations must be greater than zero".to_string(),
        });
    }

    config.required_block_confirmations = confirmations;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(
            Event::new("required_block_confirmation_changed")
                .add_attribute("required_block_confirmations", confirmations.to_string()),
        )
        .add_attribute("method", "set_required_block_confirmations"))
}
