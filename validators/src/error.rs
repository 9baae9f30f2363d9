use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid validator: {reason}")]
    InvalidValidator { reason: String },

    #[error("Validator already registered: {validator}")]
    ValidatorAlreadyRegistered { validator: String },

    #[error("Validator not registered: {validator}")]
    ValidatorNotRegistered { validator: String },

    #[error(
        "Invariant violation: required signatures {required} must be between 1 and validator count {validators}"
    )]
    InvariantViolation { required: u32, validators: u32 },

    #[error("Cannot migrate from {stored} to {expected}")]
    MigrationMismatch { stored: String, expected: String },
}
