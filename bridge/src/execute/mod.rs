//! Execute handlers for the foreign bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `relay` - ExecuteSignatures (validator-authorized release)
//! - `deposit` - native coin deposits awaiting validator affirmation
//! - `config` - limit lanes, gas price and confirmation settings
//! - `admin` - initialization, ownership transfer and token claims

mod admin;
mod config;
mod deposit;
mod relay;

pub use admin::*;
pub use config::*;
pub use deposit::*;
pub use relay::*;

use cosmwasm_std::{MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::{BridgeStatus, Config, CONFIG, STATUS};

/// Fail with `NotInitialized` unless the bridge is active
pub(crate) fn ensure_active(storage: &dyn Storage) -> Result<(), ContractError> {
    match STATUS.may_load(storage)? {
        Some(BridgeStatus::Active) => Ok(()),
        _ => Err(ContractError::NotInitialized),
    }
}

/// Load the config of an active bridge and check the caller owns it
pub(crate) fn ensure_owner(
    storage: &dyn Storage,
    info: &MessageInfo,
) -> Result<Config, ContractError> {
    ensure_active(storage)?;
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}
