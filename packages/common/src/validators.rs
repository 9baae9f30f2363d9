//! Validator set query interface.
//!
//! The validators contract answers these queries; the bridge contract sends
//! them when it verifies a relay. Validator identities are 0x-hex EVM
//! addresses (the address recovered from a secp256k1 signature).

use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
#[derive(QueryResponses)]
pub enum ValidatorsQueryMsg {
    /// Whether the given EVM address is an authorized signer
    #[returns(IsValidatorResponse)]
    IsValidator { validator: String },

    /// Minimum number of distinct validator signatures for a relay
    #[returns(RequiredSignaturesResponse)]
    RequiredSignatures {},

    /// All authorized signers, ascending by address bytes
    #[returns(ValidatorsResponse)]
    Validators {},

    /// Owner allowed to mutate the set
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct IsValidatorResponse {
    pub is_validator: bool,
}

#[cw_serde]
pub struct RequiredSignaturesResponse {
    pub required_signatures: u32,
}

#[cw_serde]
pub struct ValidatorsResponse {
    pub validators: Vec<String>,
    pub required_signatures: u32,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}
