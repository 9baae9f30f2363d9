//! Relay handler (ExecuteSignatures).
//!
//! Releases native coins for a message signed by a quorum of validators.
//! Order of checks:
//! 1. bridge active
//! 2. message decodes and targets this bridge instance
//! 3. quorum of distinct validator signatures
//! 4. source tx id not yet relayed (marked here)
//! 5. execution lane limits (reserved here)
//!
//! Any failure reverts the whole transaction, including the mark from step 4,
//! so a relay rejected by the limits can be submitted again later.

use cosmwasm_std::{coins, BankMsg, Binary, DepsMut, Env, Event, MessageInfo, Response};

use common::encode_evm_address;

use crate::address_codec::recipient_to_addr;
use crate::error::ContractError;
use crate::execute::ensure_active;
use crate::hash::bytes32_to_hex;
use crate::ledger::{save_record, try_mark_relayed};
use crate::limits::{current_day, reserve, LimitLane};
use crate::message::BridgeMessage;
use crate::msg::SignatureMsg;
use crate::signatures::{verify_quorum, Signature};
use crate::state::{RelayRecord, CONFIG, NATIVE_SETTINGS};
use crate::validator_set::RemoteValidatorSet;

/// Execute a validator-signed relay message.
pub fn execute_signatures(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    message: Binary,
    signatures: Vec<SignatureMsg>,
) -> Result<Response, ContractError> {
    ensure_active(deps.storage)?;

    let decoded = BridgeMessage::decode(message.as_slice())?;
    let settings = NATIVE_SETTINGS.load(deps.storage)?;
    if decoded.bridge_instance_id != settings.bridge_instance_id {
        return Err(ContractError::WrongBridgeInstance {
            expected: encode_evm_address(&settings.bridge_instance_id),
            got: encode_evm_address(&decoded.bridge_instance_id),
        });
    }
    let recipient = recipient_to_addr(deps.api, &decoded.recipient, &settings.address_prefix)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;

    let signatures = signatures
        .iter()
        .map(Signature::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let config = CONFIG.load(deps.storage)?;
    let validators = RemoteValidatorSet::new(deps.querier, config.validator_contract);
    let signers = verify_quorum(deps.api, &validators, &decoded.encode(), &signatures)?;

    if !try_mark_relayed(deps.storage, &decoded.source_tx_id)? {
        return Err(ContractError::AlreadyRelayed {
            source_tx_id: bytes32_to_hex(&decoded.source_tx_id),
        });
    }

    let day = current_day(&env);
    let executed_today = reserve(deps.storage, LimitLane::Execution, day, decoded.amount)?;

    let signers: Vec<String> = signers.iter().map(encode_evm_address).collect();
    save_record(
        deps.storage,
        &RelayRecord {
            recipient: recipient.clone(),
            recipient_raw: decoded.recipient,
            amount: decoded.amount,
            source_tx_id: decoded.source_tx_id,
            signers: signers.clone(),
            relayed_at: env.block.time,
            block_height: env.block.height,
        },
    )?;

    let transfer = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: coins(decoded.amount.u128(), &settings.native_denom),
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_event(
            Event::new("relayed_message")
                .add_attribute("recipient", recipient.as_str())
                .add_attribute("value", decoded.amount)
                .add_attribute("transaction_hash", bytes32_to_hex(&decoded.source_tx_id)),
        )
        .add_attribute("method", "execute_signatures")
        .add_attribute("signers", signers.join(","))
        .add_attribute("day", day.to_string())
        .add_attribute("executed_today", executed_today))
}
