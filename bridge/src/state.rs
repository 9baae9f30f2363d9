//! State definitions for the foreign bridge contract
//!
//! Everything the bridge persists lives here, so a code migration that keeps
//! these keys keeps the validator reference, limits, day buckets, the relay
//! ledger and the deposit log intact.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Lifecycle of the bridge. Relays and deposits require `Active`.
#[cw_serde]
pub enum BridgeStatus {
    Uninitialized,
    Active,
}

/// Chain-local settings fixed at instantiation
#[cw_serde]
pub struct NativeSettings {
    /// Denom of the native coin this bridge releases and accepts
    pub native_denom: String,
    /// Bech32 prefix used to render 20-byte recipients as local addresses
    pub address_prefix: String,
    /// `keccak256(contract_address)[12..]`, embedded in every signed message
    pub bridge_instance_id: [u8; 20],
}

/// Configuration written by `Initialize`
#[cw_serde]
pub struct Config {
    /// Owner allowed to change limits and parameters
    pub owner: Addr,
    /// Validators contract queried during signature verification
    pub validator_contract: Addr,
    /// Fee hint for validators submitting on the other side
    pub gas_price: Uint128,
    /// Confirmations validators wait for before signing
    pub required_block_confirmations: u64,
    /// Block height at which the bridge became active
    pub deployed_at_block: u64,
}

/// One limit lane: `min_per_tx <= max_per_tx <= daily_limit`
#[cw_serde]
pub struct Limits {
    pub daily_limit: Uint128,
    pub max_per_tx: Uint128,
    pub min_per_tx: Uint128,
}

/// Durable record of a successful relay
#[cw_serde]
pub struct RelayRecord {
    /// Local address that received the coins
    pub recipient: Addr,
    /// Raw 20-byte recipient as signed
    pub recipient_raw: [u8; 20],
    pub amount: Uint128,
    pub source_tx_id: [u8; 32],
    /// Distinct validators whose signatures authorized the relay (0x-hex)
    pub signers: Vec<String>,
    pub relayed_at: Timestamp,
    pub block_height: u64,
}

/// Deposit waiting to be observed and affirmed by validators
#[cw_serde]
pub struct DepositRecord {
    pub nonce: u64,
    pub deposit_id: [u8; 32],
    pub sender: Addr,
    /// 20-byte recipient on the other chain
    pub recipient: [u8; 20],
    pub amount: Uint128,
    pub deposited_at: Timestamp,
    pub block_height: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:foreign-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of a day bucket in seconds
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Pre-image of the 4-byte bridge mode tag
pub const BRIDGE_MODE_TAG: &str = "inverted-native-to-erc-core";

pub const DEFAULT_NATIVE_DENOM: &str = "uluna";

pub const DEFAULT_ADDRESS_PREFIX: &str = "terra";

// ============================================================================
// Core State Storage
// ============================================================================

pub const STATUS: Item<BridgeStatus> = Item::new("status");

/// Account that instantiated the contract; the only one allowed to initialize
pub const DEPLOYER: Item<Addr> = Item::new("deployer");

pub const NATIVE_SETTINGS: Item<NativeSettings> = Item::new("native_settings");

pub const CONFIG: Item<Config> = Item::new("config");

// ============================================================================
// Limits and Day Buckets
// ============================================================================

/// Limits applied to inbound deposits
pub const DEPOSIT_LIMITS: Item<Limits> = Item::new("deposit_limits");

/// Limits applied to relayed executions
pub const EXECUTION_LIMITS: Item<Limits> = Item::new("execution_limits");

/// Key: day index, Value: total deposited that day
pub const TOTAL_SPENT_PER_DAY: Map<u64, Uint128> = Map::new("total_spent_per_day");

/// Key: day index, Value: total relayed that day
pub const TOTAL_EXECUTED_PER_DAY: Map<u64, Uint128> = Map::new("total_executed_per_day");

// ============================================================================
// Relay Ledger
// ============================================================================

/// Key: 32-byte source transaction id, Value: relayed flag (write-once)
pub const RELAYED_MESSAGES: Map<&[u8], bool> = Map::new("relayed_messages");

/// Key: 32-byte source transaction id, Value: RelayRecord
pub const RELAY_RECORDS: Map<&[u8], RelayRecord> = Map::new("relay_records");

// ============================================================================
// Deposits
// ============================================================================

/// Nonce assigned to the next deposit
pub const DEPOSIT_NONCE: Item<u64> = Item::new("deposit_nonce");

/// Key: 32-byte deposit id, Value: DepositRecord
pub const DEPOSITS: Map<&[u8], DepositRecord> = Map::new("deposits");

/// Key: nonce, Value: 32-byte deposit id
pub const DEPOSIT_BY_NONCE: Map<u64, [u8; 32]> = Map::new("deposit_by_nonce");
