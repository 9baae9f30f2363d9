//! Message types for the foreign bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::state::{BridgeStatus, Limits};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// Without `initialize` the bridge stays `Uninitialized` until the deployer
/// sends `ExecuteMsg::Initialize`.
#[cw_serde]
pub struct InstantiateMsg {
    /// Native denom released by relays and accepted by deposits (default "uluna")
    pub native_denom: Option<String>,
    /// Bech32 prefix for rendering recipients (default "terra")
    pub address_prefix: Option<String>,
    /// Deploy-and-initialize in one step
    pub initialize: Option<InitializeMsg>,
}

/// One-time initialization parameters
#[cw_serde]
pub struct InitializeMsg {
    /// Validators contract holding the signer set and threshold
    pub validator_contract: String,
    /// Deposit lane: total per day
    pub daily_limit: Uint128,
    /// Deposit lane: maximum single deposit
    pub max_per_tx: Uint128,
    /// Deposit lane: minimum single deposit
    pub min_per_tx: Uint128,
    /// Fee hint for validators, must be non-zero
    pub gas_price: Uint128,
    /// Confirmations validators wait for, must be non-zero
    pub required_block_confirmations: u64,
    /// Execution lane: total relayed per day
    pub execution_daily_limit: Uint128,
    /// Execution lane: maximum single relay
    pub execution_max_per_tx: Uint128,
    /// Owner of the bridge parameters
    pub owner: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// A validator signature over the EIP-191 digest of a relay message
#[cw_serde]
pub struct SignatureMsg {
    /// Recovery byte, 27 or 28
    pub v: u8,
    /// 32-byte r
    pub r: Binary,
    /// 32-byte s
    pub s: Binary,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Lifecycle
    // ========================================================================
    /// Deployer-only, once
    Initialize(InitializeMsg),

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Release native coins authorized by a quorum of validator signatures
    ExecuteSignatures {
        /// 104-byte encoded relay message
        message: Binary,
        /// Signatures in any order
        signatures: Vec<SignatureMsg>,
    },

    /// Deposit native coins to be relayed to `recipient` on the other chain
    Deposit {
        /// 0x-hex EVM address
        recipient: String,
    },

    // ========================================================================
    // Limits (owner)
    // ========================================================================
    SetDailyLimit { daily_limit: Uint128 },
    SetMaxPerTx { max_per_tx: Uint128 },
    SetMinPerTx { min_per_tx: Uint128 },
    SetExecutionDailyLimit { daily_limit: Uint128 },
    SetExecutionMaxPerTx { max_per_tx: Uint128 },
    SetExecutionMinPerTx { min_per_tx: Uint128 },

    // ========================================================================
    // Parameters (owner)
    // ========================================================================
    SetGasPrice { gas_price: Uint128 },
    SetRequiredBlockConfirmations { confirmations: u64 },
    TransferOwnership { new_owner: String },

    /// Sweep a stray asset (never the bridged native denom) to `to`
    ClaimTokens { asset: AssetInfo, to: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(IsInitializedResponse)]
    IsInitialized {},

    #[returns(ConfigResponse)]
    Config {},

    /// Both limit lanes
    #[returns(LimitsResponse)]
    Limits {},

    #[returns(CurrentDayResponse)]
    CurrentDay {},

    /// Deposit lane total for a day index
    #[returns(DayTotalResponse)]
    TotalSpentPerDay { day: u64 },

    /// Execution lane total for a day index
    #[returns(DayTotalResponse)]
    TotalExecutedPerDay { day: u64 },

    /// Today's totals and headroom on both lanes
    #[returns(DailyUsageResponse)]
    DailyUsage {},

    /// Whether a deposit of `amount` would pass the deposit lane now
    #[returns(WithinLimitResponse)]
    WithinLimit { amount: Uint128 },

    /// Whether a relay of `amount` would pass the execution lane now
    #[returns(WithinLimitResponse)]
    WithinExecutionLimit { amount: Uint128 },

    /// Relayed flag and record for a 32-byte source transaction id
    #[returns(RelayedMessageResponse)]
    RelayedMessage { source_tx_id: Binary },

    #[returns(Option<DepositResponse>)]
    Deposit { nonce: u64 },

    #[returns(Option<DepositResponse>)]
    DepositById { deposit_id: Binary },

    /// Id validators must embed in messages for this deployment
    #[returns(BridgeInstanceIdResponse)]
    BridgeInstanceId {},

    #[returns(BridgeModeResponse)]
    BridgeMode {},

    #[returns(BridgeInterfacesVersionResponse)]
    BridgeInterfacesVersion {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct IsInitializedResponse {
    pub initialized: bool,
    pub status: BridgeStatus,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub validator_contract: Addr,
    pub native_denom: String,
    pub address_prefix: String,
    pub gas_price: Uint128,
    pub required_block_confirmations: u64,
    pub deployed_at_block: u64,
    /// 0x-hex, 20 bytes
    pub bridge_instance_id: String,
}

#[cw_serde]
pub struct LimitsResponse {
    pub deposit: Limits,
    pub execution: Limits,
}

#[cw_serde]
pub struct CurrentDayResponse {
    pub day: u64,
}

#[cw_serde]
pub struct DayTotalResponse {
    pub day: u64,
    pub total: Uint128,
}

#[cw_serde]
pub struct LaneUsage {
    pub total: Uint128,
    pub daily_limit: Uint128,
    pub remaining: Uint128,
}

#[cw_serde]
pub struct DailyUsageResponse {
    pub day: u64,
    pub deposit: LaneUsage,
    pub execution: LaneUsage,
}

#[cw_serde]
pub struct WithinLimitResponse {
    pub within_limit: bool,
}

#[cw_serde]
pub struct RelayRecordResponse {
    pub recipient: Addr,
    /// 0x-hex of the signed 20-byte recipient
    pub recipient_raw: String,
    pub amount: Uint128,
    pub signers: Vec<String>,
    pub relayed_at: Timestamp,
    pub block_height: u64,
}

#[cw_serde]
pub struct RelayedMessageResponse {
    pub source_tx_id: Binary,
    pub relayed: bool,
    pub record: Option<RelayRecordResponse>,
}

#[cw_serde]
pub struct DepositResponse {
    pub nonce: u64,
    pub deposit_id: Binary,
    pub sender: Addr,
    /// 0x-hex EVM address
    pub recipient: String,
    pub amount: Uint128,
    pub deposited_at: Timestamp,
    pub block_height: u64,
}

#[cw_serde]
pub struct BridgeInstanceIdResponse {
    /// 0x-hex, 20 bytes
    pub bridge_instance_id: String,
}

#[cw_serde]
pub struct BridgeModeResponse {
    /// 0x-hex, 4 bytes
    pub mode: String,
}

#[cw_serde]
pub struct BridgeInterfacesVersionResponse {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}
