use cosmwasm_schema::cw_serde;

pub use common::validators::{
    IsValidatorResponse, OwnerResponse, RequiredSignaturesResponse, ValidatorsQueryMsg as QueryMsg,
    ValidatorsResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner who can add/remove validators and change the threshold
    pub owner: String,
    /// Initial validator EVM addresses (0x-hex)
    pub validators: Vec<String>,
    /// Distinct signatures required to authorize a relay
    pub required_signatures: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner: authorize a new signer
    AddValidator { validator: String },
    /// Owner: revoke a signer (must keep the threshold reachable)
    RemoveValidator { validator: String },
    /// Owner: change the signature threshold
    SetRequiredSignatures { required_signatures: u32 },
    /// Owner: hand the set over to a new owner
    TransferOwnership { new_owner: String },
}

#[cw_serde]
pub struct MigrateMsg {}
