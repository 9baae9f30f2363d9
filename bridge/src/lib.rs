//! Foreign Bridge Contract - Validator-Authorized Native Coin Relays
//!
//! This contract releases native coins on this chain when a quorum of
//! off-chain validators has signed a relay message, and accepts native coin
//! deposits that validators then affirm on the other chain.
//!
//! # Incoming Flow (Relay)
//! 1. Validators observe a transfer on the other chain
//! 2. Each signs the 104-byte relay message (EIP-191 personal-sign)
//! 3. Anyone submits the message and signatures with `ExecuteSignatures`
//! 4. The bridge verifies quorum, marks the source tx id, reserves the
//!    execution limit and sends the coins
//!
//! # Outgoing Flow (Deposit)
//! 1. User sends native coins with `Deposit { recipient }`
//! 2. The deposit lane limits are reserved and a deposit id is published
//! 3. Validators affirm the deposit on the other chain
//!
//! # Security
//! - Signer membership and threshold live in a separate validators contract
//! - Each source tx id can be relayed at most once
//! - Daily and per-transaction caps on both directions

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod ledger;
pub mod limits;
pub mod message;
pub mod msg;
mod query;
pub mod signatures;
pub mod state;
pub mod validator_set;

pub use crate::error::ContractError;
pub use crate::hash::keccak256;
pub use crate::message::{signing_hash, BridgeMessage};
