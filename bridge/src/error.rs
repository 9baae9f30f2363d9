//! Error types for the foreign bridge contract
//!
//! Variants are grouped by failure class so callers can tell a bad admin
//! input from a rejected relay or an exhausted limit.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Bridge is already initialized")]
    AlreadyInitialized,

    #[error("Bridge is not initialized")]
    NotInitialized,

    // ========================================================================
    // Config Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid {lane} limits: require min_per_tx ({min}) <= max_per_tx ({max}) <= daily_limit ({daily})")]
    LimitOrdering {
        lane: String,
        min: Uint128,
        max: Uint128,
        daily: Uint128,
    },

    #[error("Invalid validator contract: {reason}")]
    InvalidValidatorContract { reason: String },

    // ========================================================================
    // Message Errors
    // ========================================================================

    #[error("Malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("Message is for bridge instance {got}, expected {expected}")]
    WrongBridgeInstance { expected: String, got: String },

    // ========================================================================
    // Signature / Quorum Errors
    // ========================================================================

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Signer {signer} is not a validator")]
    NotAValidator { signer: String },

    #[error("Duplicate signature from {signer}")]
    DuplicateSignature { signer: String },

    #[error("Insufficient quorum: got {got} signatures, need {required}")]
    InsufficientQuorum { got: u32, required: u32 },

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Message already relayed: {source_tx_id}")]
    AlreadyRelayed { source_tx_id: String },

    // ========================================================================
    // Limit Errors
    // ========================================================================

    #[error("Amount {amount} is below the minimum per transaction {min}")]
    BelowMinimum { amount: Uint128, min: Uint128 },

    #[error("Amount {amount} is above the maximum per transaction {max}")]
    AboveMaxPerTx { amount: Uint128, max: Uint128 },

    #[error("Daily limit exceeded: {spent} already spent today, {amount} requested, limit is {limit}")]
    DailyLimitExceeded {
        amount: Uint128,
        spent: Uint128,
        limit: Uint128,
    },

    // ========================================================================
    // Funds Errors
    // ========================================================================

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Cannot claim the bridged asset {denom}")]
    CannotClaimBridgedAsset { denom: String },

    #[error("Nothing to claim")]
    NothingToClaim,

    // ========================================================================
    // Migration Errors
    // ========================================================================

    #[error("Cannot migrate from {stored} to {expected}")]
    MigrationMismatch { stored: String, expected: String },
}
