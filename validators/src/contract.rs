use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdError, StdResult, Storage,
};
use cw2::{get_contract_version, set_contract_version};

use common::{encode_evm_address, parse_evm_address, EVM_ADDRESS_LENGTH, ZERO_EVM_ADDRESS};

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, IsValidatorResponse, MigrateMsg, OwnerResponse, QueryMsg,
    RequiredSignaturesResponse, ValidatorsResponse,
};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, OWNER, REQUIRED_SIGNATURES, VALIDATORS, VALIDATOR_COUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.save(deps.storage, &owner)?;

    let mut count = 0u32;
    for validator in &msg.validators {
        let raw = parse_validator(validator)?;
        if VALIDATORS.has(deps.storage, &raw) {
            return Err(ContractError::ValidatorAlreadyRegistered {
                validator: encode_evm_address(&raw),
            });
        }
        VALIDATORS.save(deps.storage, &raw, &true)?;
        count += 1;
    }
    VALIDATOR_COUNT.save(deps.storage, &count)?;

    ensure_threshold(msg.required_signatures, count)?;
    REQUIRED_SIGNATURES.save(deps.storage, &msg.required_signatures)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("validator_count", count.to_string())
        .add_attribute("required_signatures", msg.required_signatures.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddValidator { validator } => execute_add_validator(deps, info, validator),
        ExecuteMsg::RemoveValidator { validator } => {
            execute_remove_validator(deps, info, validator)
        }
        ExecuteMsg::SetRequiredSignatures {
            required_signatures,
        } => execute_set_required_signatures(deps, info, required_signatures),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

fn execute_add_validator(
    deps: DepsMut,
    info: MessageInfo,
    validator: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let raw = parse_validator(&validator)?;
    if VALIDATORS.has(deps.storage, &raw) {
        return Err(ContractError::ValidatorAlreadyRegistered {
            validator: encode_evm_address(&raw),
        });
    }

    VALIDATORS.save(deps.storage, &raw, &true)?;
    let count = VALIDATOR_COUNT.load(deps.storage)? + 1;
    VALIDATOR_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_event(
            Event::new("validator_added").add_attribute("validator", encode_evm_address(&raw)),
        )
        .add_attribute("action", "add_validator")
        .add_attribute("validator_count", count.to_string()))
}

fn execute_remove_validator(
    deps: DepsMut,
    info: MessageInfo,
    validator: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let raw = parse_validator(&validator)?;
    if !VALIDATORS.has(deps.storage, &raw) {
        return Err(ContractError::ValidatorNotRegistered {
            validator: encode_evm_address(&raw),
        });
    }

    let count = VALIDATOR_COUNT.load(deps.storage)? - 1;
    let required = REQUIRED_SIGNATURES.load(deps.storage)?;
    ensure_threshold(required, count)?;

    VALIDATORS.remove(deps.storage, &raw);
    VALIDATOR_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_event(
            Event::new("validator_removed").add_attribute("validator", encode_evm_address(&raw)),
        )
        .add_attribute("action", "remove_validator")
        .add_attribute("validator_count", count.to_string()))
}

fn execute_set_required_signatures(
    deps: DepsMut,
    info: MessageInfo,
    required_signatures: u32,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let count = VALIDATOR_COUNT.load(deps.storage)?;
    ensure_threshold(required_signatures, count)?;
    REQUIRED_SIGNATURES.save(deps.storage, &required_signatures)?;

    Ok(Response::new()
        .add_event(
            Event::new("required_signatures_changed")
                .add_attribute("required_signatures", required_signatures.to_string()),
        )
        .add_attribute("action", "set_required_signatures"))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let previous = ensure_owner(deps.storage, &info)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous)
                .add_attribute("new_owner", new_owner),
        )
        .add_attribute("action", "transfer_ownership"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsValidator { validator } => {
            to_json_binary(&query_is_validator(deps, validator)?)
        }
        QueryMsg::RequiredSignatures {} => to_json_binary(&RequiredSignaturesResponse {
            required_signatures: REQUIRED_SIGNATURES.load(deps.storage)?,
        }),
        QueryMsg::Validators {} => to_json_binary(&query_validators(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?.to_string(),
        }),
    }
}

fn query_is_validator(deps: Deps, validator: String) -> StdResult<IsValidatorResponse> {
    // Malformed identities are simply not validators
    let is_validator = match parse_evm_address(&validator) {
        Ok(raw) => VALIDATORS.may_load(deps.storage, &raw)?.unwrap_or(false),
        Err(_) => false,
    };
    Ok(IsValidatorResponse { is_validator })
}

fn query_validators(deps: Deps) -> StdResult<ValidatorsResponse> {
    let validators = VALIDATORS
        .keys(deps.storage, None, None, Order::Ascending)
        .map(|key| {
            let key = key?;
            let raw: [u8; EVM_ADDRESS_LENGTH] = key.as_slice().try_into().map_err(|_| {
                StdError::generic_err("corrupt validator key in storage")
            })?;
            Ok(encode_evm_address(&raw))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ValidatorsResponse {
        validators,
        required_signatures: REQUIRED_SIGNATURES.load(deps.storage)?,
    })
}

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

// ============================================================================
// Internal Helpers
// ============================================================================

fn ensure_owner(
    storage: &dyn Storage,
    info: &MessageInfo,
) -> Result<Addr, ContractError> {
    let owner = OWNER.load(storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(owner)
}

fn ensure_threshold(required: u32, validators: u32) -> Result<(), ContractError> {
    if required == 0 || required > validators {
        return Err(ContractError::InvariantViolation {
            required,
            validators,
        });
    }
    Ok(())
}

fn parse_validator(validator: &str) -> Result<[u8; EVM_ADDRESS_LENGTH], ContractError> {
    let raw = parse_evm_address(validator).map_err(|e| ContractError::InvalidValidator {
        reason: e.to_string(),
    })?;
    if raw == ZERO_EVM_ADDRESS {
        return Err(ContractError::InvalidValidator {
            reason: "zero address".to_string(),
        });
    }
    Ok(raw)
}
