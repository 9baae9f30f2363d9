//! Bridge Validators Contract
//!
//! Holds the set of EVM addresses whose secp256k1 signatures authorize relays
//! on the foreign bridge, together with the number of distinct signatures a
//! relay needs. The set is owner-managed and the bridge only ever reads it.
//!
//! Invariant maintained by every mutation:
//! `1 <= required_signatures <= validator_count`

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
