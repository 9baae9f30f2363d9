//! Deposit handler.
//!
//! Native coins sent here are held by the bridge and published under a
//! deposit id for validators to affirm on the other chain.

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response};

use common::{encode_evm_address, parse_evm_address, ZERO_EVM_ADDRESS};

use crate::error::ContractError;
use crate::execute::ensure_active;
use crate::hash::{bytes32_to_hex, compute_deposit_id};
use crate::limits::{current_day, reserve, LimitLane};
use crate::state::{DepositRecord, DEPOSITS, DEPOSIT_BY_NONCE, DEPOSIT_NONCE, NATIVE_SETTINGS};

/// Accept exactly one coin of the bridged denom for `recipient`.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    ensure_active(deps.storage)?;
    let settings = NATIVE_SETTINGS.load(deps.storage)?;

    // Validate funds
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidFunds {
            reason: "Only one coin allowed per deposit".to_string(),
        });
    }
    let coin = &info.funds[0];
    if coin.denom != settings.native_denom {
        return Err(ContractError::InvalidFunds {
            reason: format!("expected {}, got {}", settings.native_denom, coin.denom),
        });
    }
    if coin.amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }
    let amount = coin.amount;

    let recipient_raw =
        parse_evm_address(&recipient).map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    if recipient_raw == ZERO_EVM_ADDRESS {
        return Err(ContractError::InvalidAddress {
            reason: "zero recipient".to_string(),
        });
    }

    let day = current_day(&env);
    let spent_today = reserve(deps.storage, LimitLane::Deposit, day, amount)?;

    let nonce = DEPOSIT_NONCE.load(deps.storage)?;
    DEPOSIT_NONCE.save(deps.storage, &(nonce + 1))?;

    let deposit_id = compute_deposit_id(
        &settings.bridge_instance_id,
        &info.sender,
        &recipient_raw,
        amount.u128(),
        nonce,
    );
    let record = DepositRecord {
        nonce,
        deposit_id,
        sender: info.sender.clone(),
        recipient: recipient_raw,
        amount,
        deposited_at: env.block.time,
        block_height: env.block.height,
    };
    DEPOSITS.save(deps.storage, &deposit_id, &record)?;
    DEPOSIT_BY_NONCE.save(deps.storage, nonce, &deposit_id)?;

    Ok(Response::new()
        .add_event(
            Event::new("user_request_for_affirmation")
                .add_attribute("recipient", encode_evm_address(&recipient_raw))
                .add_attribute("value", amount)
                .add_attribute("deposit_id", bytes32_to_hex(&deposit_id))
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("sender", info.sender.as_str()),
        )
        .add_attribute("method", "deposit")
        .add_attribute("spent_today", spent_today))
}
