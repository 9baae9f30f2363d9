//! Asset descriptors used by administrative sweeps.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use std::fmt;

/// Identifies a fungible asset held by a contract.
#[cw_serde]
pub enum AssetInfo {
    /// Bank module denomination (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}
